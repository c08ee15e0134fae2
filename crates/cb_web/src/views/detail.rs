use cb_core::Article;
use maud::{html, Markup};
use url::Url;

use super::layout::{page, Assets};
use super::{timestamp, SITE_NAME};

/// Only web links are placed in an `href`. Anything else is shown as text.
fn outbound_href(raw: &str) -> Option<&str> {
    let parsed = Url::parse(raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(raw)
}

pub fn render_detail_page(article: &Article, assets: Assets) -> Markup {
    page(
        &format!("{} - {}", article.title, SITE_NAME),
        assets,
        None,
        html! {
            div class="container article-page" {
                h2 { (article.title) }
                p class="meta" {
                    strong { "Author(s):" } " " (article.authors)
                    br;
                    strong { "Created:" } " " (timestamp(&article.created_at))
                    br;
                    strong { "Scraped:" } " " (timestamp(&article.scraped_at))
                }
                pre class="code-block" { (article.summary) }
                @match outbound_href(&article.url) {
                    Some(href) => {
                        a href=(href) target="_blank" rel="noopener noreferrer" class="btn external" {
                            "View Full Article on Source Website →"
                        }
                    }
                    None => {
                        span class="btn external disabled" { (article.url) }
                    }
                }
                br;
                br;
                a href="/" class="btn" { "← Back" }
            }
        },
    )
}
