use maud::{html, Markup, DOCTYPE};

use super::SITE_BANNER;

/// Which static files a page pulls in. Empty unless `/assets` is served.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assets {
    pub enabled: bool,
}

impl Assets {
    pub fn served(enabled: bool) -> Self {
        Self { enabled }
    }
}

pub fn page(title: &str, assets: Assets, script_src: Option<&str>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if assets.enabled {
                    link rel="stylesheet" href="/assets/css/style.css";
                    link rel="icon" href="/assets/images/code.png";
                    @if let Some(src) = script_src {
                        script src=(src) defer {}
                    }
                }
            }
            body {
                header class="topbar" {
                    h1 { (SITE_BANNER) }
                }
                (body)
            }
        }
    }
}
