use async_trait::async_trait;
use cb_core::{Article, ArticleId, ArticleStore, Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use super::row::{self, ArticleRow};

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        url TEXT NOT NULL UNIQUE,
        title TEXT,
        authors TEXT,
        summary TEXT,
        created_at TEXT,
        scraped_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_articles_recency ON articles (COALESCE(created_at, scraped_at))",
    // Add future migrations here
];

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect using a `sqlite:` URL, creating the database file if needed.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| Error::Config(format!("Invalid SQLite URL {}: {}", url, e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| Error::Database(format!("Failed to connect to database: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| Error::Database(format!("Failed to run migration {}: {}", i, e)))?;
        }

        Ok(Self { pool })
    }

    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::connect(&format!("sqlite://{}", db_path.display())).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ArticleStore for SqliteStore {
    fn name(&self) -> &'static str {
        "sqlite"
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
