use cb_core::{Article, ArticleId, Error, Result};
use chrono::NaiveDateTime;

/// Undated rows sort by their ingestion time, matching the fallback below.
pub(crate) const SELECT_RECENT: &str = r#"
    SELECT id, title, authors, url, summary, created_at, scraped_at
    FROM articles
    ORDER BY COALESCE(created_at, scraped_at) DESC, id DESC
    LIMIT ?
"#;

pub(crate) const SELECT_BY_ID: &str = r#"
    SELECT id, title, authors, url, summary, created_at, scraped_at
    FROM articles
    WHERE id = ?
    LIMIT 1
"#;

/// Raw row as the scraper leaves it. Text columns are nullable upstream.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ArticleRow {
    id: i64,
    title: Option<String>,
    authors: Option<String>,
    url: String,
    summary: Option<String>,
    created_at: Option<NaiveDateTime>,
    scraped_at: NaiveDateTime,
}

impl TryFrom<ArticleRow> for Article {
    type Error = Error;

    fn try_from(row: ArticleRow) -> Result<Self> {
        let id = ArticleId::try_from(row.id)
            .map_err(|e| Error::Database(format!("Malformed article row: {}", e)))?;

        Ok(Article {
            id,
            title: row.title.unwrap_or_default(),
            authors: row.authors.unwrap_or_default(),
            url: row.url,
            summary: row.summary.unwrap_or_default(),
            // Sources without a publication date fall back to ingestion time.
            created_at: row.created_at.unwrap_or(row.scraped_at),
            scraped_at: row.scraped_at,
        })
    }
}

pub(crate) fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

pub(crate) fn into_articles(rows: Vec<ArticleRow>) -> Result<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}
