pub mod sqlite;

pub use sqlite::repository::SqliteBookmarkRepository;
