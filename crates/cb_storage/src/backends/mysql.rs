use async_trait::async_trait;
use cb_core::{Article, ArticleId, ArticleStore, Error, Result};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::debug;

use super::row::{self, ArticleRow};

/// Store over an existing MySQL `articles` table. No migrations run here.
///
/// The table must expose `id`, `title`, `authors`, `url`, `summary`,
/// `created_at` and `scraped_at`. Scraper databases that only carry
/// `published_at` need a `created_at` column or view on top.
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .connect(url)
            .await
            .map_err(|e| Error::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for MySqlStore {
    fn name(&self) -> &'static str {
        "mysql"
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Article>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ArticleRow>(row::SELECT_RECENT)
            .bind(row::limit_param(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("Failed to list recent articles: {}", e)))?;

        debug!("Fetched {} recent articles", rows.len());
        row::into_articles(rows)
    }

    async fn get_by_id(&self, id: ArticleId) -> Result<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(row::SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("Failed to fetch article {}: {}", id, e)))?;

        row.map(Article::try_from).transpose()
    }
}
