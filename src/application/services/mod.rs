pub mod bookmark_service;
pub mod bookmark_service_impl;

pub use bookmark_service::{BookmarkService, ImportReport};
pub use bookmark_service_impl::BookmarkServiceImpl;
