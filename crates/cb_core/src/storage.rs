use async_trait::async_trait;

use crate::types::{Article, ArticleId};
use crate::Result;

/// Read-only access to the scraped articles table.
///
/// Implementations must bind every caller-supplied value as a query
/// parameter.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Human readable backend name, used in logs.
    fn name(&self) -> &'static str;

    /// Most recent articles first, at most `limit` of them.
    ///
    /// An empty table yields an empty vector, and so does a `limit` of zero.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Article>>;

    /// Look up a single article.
    async fn get_by_id(&self, id: ArticleId) -> Result<Option<Article>>;
}
