use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

/// Identifier of a stored article. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid article id: {0:?}")]
pub struct InvalidArticleId(pub String);

impl ArticleId {
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ArticleId {
    type Err = InvalidArticleId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidArticleId(s.to_string()))
    }
}

impl TryFrom<i64> for ArticleId {
    type Error = InvalidArticleId;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| InvalidArticleId(raw.to_string()))
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scraped article as persisted by the ingestion process.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Free-form author list, kept exactly as the scraper stored it.
    pub authors: String,
    pub url: String,
    pub summary: String,
    pub created_at: NaiveDateTime,
    pub scraped_at: NaiveDateTime,
}
