// src/application/services/bookmark_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::bookmark::{Bookmark, BookmarkDraft};
use crate::domain::search::SearchQuery;
use crate::domain::tag::Tag;
use async_trait::async_trait;
use std::fmt::Debug;

/// Outcome of a bulk import: how many items were persisted and how many were
/// skipped (missing required fields, duplicate ids, malformed entries).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Service interface for bookmark operations, consumed by the CLI layer.
#[async_trait]
pub trait BookmarkService: Send + Sync + Debug {
    /// Validate and persist a new bookmark.
    async fn add_bookmark(&self, draft: BookmarkDraft) -> ApplicationResult<Bookmark>;

    /// Get a bookmark by ID.
    async fn get_bookmark(&self, id: i32) -> ApplicationResult<Option<Bookmark>>;

    /// Replace an existing bookmark wholesale.
    async fn update_bookmark(&self, bookmark: Bookmark) -> ApplicationResult<Bookmark>;

    /// Delete a bookmark by ID; deleting an absent id succeeds.
    async fn delete_bookmark(&self, id: i32) -> ApplicationResult<bool>;

    /// Delete every bookmark in one bulk operation.
    async fn delete_all(&self) -> ApplicationResult<()>;

    /// All bookmarks with the query contract applied: text filter, tag
    /// filter, newest first.
    async fn list_bookmarks(&self, query: &SearchQuery) -> ApplicationResult<Vec<Bookmark>>;

    /// Bookmarks carrying the given tag, via the store's tag index.
    async fn get_bookmarks_by_tag(&self, tag: &Tag) -> ApplicationResult<Vec<Bookmark>>;

    /// Serialize every bookmark to a JSON array backup.
    async fn export_bookmarks(&self) -> ApplicationResult<String>;

    /// Import a JSON array backup. Items are added one at a time, each
    /// awaited; invalid or duplicate items are skipped and counted, a
    /// non-array payload is rejected before any add is attempted.
    async fn import_bookmarks(&self, payload: &str) -> ApplicationResult<ImportReport>;
}
