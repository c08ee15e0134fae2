pub mod memory;

#[cfg(any(feature = "sqlite", feature = "mysql"))]
mod row;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "mysql")]
pub mod mysql;

pub use memory::InMemoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "mysql")]
pub use mysql::MySqlStore;
