use cb_core::Article;
use maud::{html, Markup};

use super::layout::{page, Assets};
use super::{timestamp, SITE_NAME};

/// Summaries longer than this are cut on the front page.
pub const PREVIEW_CHARS: usize = 400;

pub fn preview(summary: &str) -> String {
    match summary.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", summary[..cut].trim_end()),
        None => summary.to_string(),
    }
}

pub fn render_card(article: &Article) -> Markup {
    html! {
        div class="article-card" {
            h3 class="article-title" { (article.title) }
            p class="article-meta" {
                strong { "Authors:" } " " (article.authors)
                br;
                strong { "Created:" } " " (timestamp(&article.created_at))
            }
            pre class="code-block preview" { (preview(&article.summary)) }
            a href={ "/article?id=" (article.id.get()) } class="btn" { "Read More →" }
        }
    }
}

pub fn render_list_page(articles: &[Article], assets: Assets) -> Markup {
    page(
        &format!("{} - Tech News", SITE_NAME),
        assets,
        Some("/assets/script.js"),
        html! {
            div class="container" {
                h2 class="section-title" { "Latest Tech Articles" }
                div class="articles-grid" {
                    @for article in articles {
                        (render_card(article))
                    }
                }
            }
        },
    )
}
