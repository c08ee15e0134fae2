use cb_core::{ArticleStore, Error, Result};
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub mod backends;

pub use backends::*;

/// Which backend serves the articles table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageKind {
    Memory,
    Sqlite,
    Mysql,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageKind::Memory => "memory",
            StorageKind::Sqlite => "sqlite",
            StorageKind::Mysql => "mysql",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub kind: StorageKind,
    pub url: Option<String>,
}

impl StorageConfig {
    pub fn new(kind: StorageKind) -> Self {
        Self { kind, url: None }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    fn required_url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .ok_or_else(|| Error::Config(format!("A database URL is required for the {} backend", self.kind)))
    }
}

/// Open the configured backend once, for the lifetime of the process.
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn ArticleStore>> {
    let store: Arc<dyn ArticleStore> = match config.kind {
        StorageKind::Memory => Arc::new(InMemoryStore::new()),
        #[cfg(feature = "sqlite")]
        StorageKind::Sqlite => Arc::new(SqliteStore::connect(config.required_url()?).await?),
        #[cfg(feature = "mysql")]
        StorageKind::Mysql => Arc::new(MySqlStore::connect(config.required_url()?).await?),
        #[allow(unreachable_patterns)]
        kind => {
            return Err(Error::Config(format!(
                "Backend {} is not compiled in, rebuild with the \"{}\" feature",
                kind, kind
            )))
        }
    };

    info!("💾 Opened {} article store", store.name());
    Ok(store)
}
