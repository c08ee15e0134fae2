use cb_core::ArticleStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
    /// Directory served under `/assets`, if any.
    pub assets_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            assets_dir: None,
        }
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }
}
