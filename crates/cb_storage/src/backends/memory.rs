use async_trait::async_trait;
use cb_core::{Article, ArticleId, ArticleStore, Result};
use std::collections::BTreeMap;

/// Fixed set of articles held in memory. Useful for local runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    articles: BTreeMap<ArticleId, Article>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries replace earlier ones with the same id.
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        Self {
            articles: articles.into_iter().map(|a| (a.id, a)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[async_trait]
impl ArticleStore for InMemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Article>> {
        let mut articles = self.articles.values().cloned().collect::<Vec<_>>();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        articles.truncate(limit);
        Ok(articles)
    }

    async fn get_by_id(&self, id: ArticleId) -> Result<Option<Article>> {
        Ok(self.articles.get(&id).cloned())
    }
}
