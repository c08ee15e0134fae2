pub mod error;
pub mod storage;
pub mod types;

pub use error::Error;
pub use storage::ArticleStore;
pub use types::{Article, ArticleId, InvalidArticleId};

pub type Result<T> = std::result::Result<T, Error>;

/// Number of articles shown on the front page.
pub const FRONT_PAGE_SIZE: usize = 50;
