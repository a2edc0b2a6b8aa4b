pub mod repository;

pub use repository::BookmarkRepository;
