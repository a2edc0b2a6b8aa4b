// src/application/services/bookmark_service_impl.rs
use crate::application::error::ApplicationResult;
use crate::application::services::bookmark_service::{BookmarkService, ImportReport};
use crate::domain::bookmark::{Bookmark, BookmarkDraft};
use crate::domain::error::DomainError;
use crate::domain::repositories::BookmarkRepository;
use crate::domain::search::SearchQuery;
use crate::domain::tag::Tag;
use crate::infrastructure::json::{parse_backup, to_json_array, JsonBookmarkRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Default implementation backed by a bookmark repository.
///
/// Holds no bookmark cache of its own: every read goes through the store, so
/// callers always observe the latest committed state.
#[derive(Debug)]
pub struct BookmarkServiceImpl {
    repository: Arc<dyn BookmarkRepository>,
}

impl BookmarkServiceImpl {
    pub fn new(repository: Arc<dyn BookmarkRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BookmarkService for BookmarkServiceImpl {
    #[instrument(skip_all, level = "debug")]
    async fn add_bookmark(&self, draft: BookmarkDraft) -> ApplicationResult<Bookmark> {
        Ok(self.repository.add(draft).await?)
    }

    #[instrument(skip_all, level = "debug")]
    async fn get_bookmark(&self, id: i32) -> ApplicationResult<Option<Bookmark>> {
        Ok(self.repository.get_by_id(id).await?)
    }

    #[instrument(skip_all, level = "debug")]
    async fn update_bookmark(&self, bookmark: Bookmark) -> ApplicationResult<Bookmark> {
        Ok(self.repository.update(bookmark).await?)
    }

    #[instrument(skip_all, level = "debug")]
    async fn delete_bookmark(&self, id: i32) -> ApplicationResult<bool> {
        Ok(self.repository.delete(id).await?)
    }

    #[instrument(skip_all, level = "debug")]
    async fn delete_all(&self) -> ApplicationResult<()> {
        Ok(self.repository.clear().await?)
    }

    #[instrument(skip_all, level = "debug")]
    async fn list_bookmarks(&self, query: &SearchQuery) -> ApplicationResult<Vec<Bookmark>> {
        let all = self.repository.get_all().await?;
        Ok(query.apply(all))
    }

    #[instrument(skip_all, level = "debug")]
    async fn get_bookmarks_by_tag(&self, tag: &Tag) -> ApplicationResult<Vec<Bookmark>> {
        Ok(self.repository.get_by_tag(tag).await?)
    }

    #[instrument(skip_all, level = "debug")]
    async fn export_bookmarks(&self) -> ApplicationResult<String> {
        let bookmarks = self.repository.get_all().await?;
        Ok(to_json_array(&bookmarks)?)
    }

    #[instrument(skip_all, level = "debug")]
    async fn import_bookmarks(&self, payload: &str) -> ApplicationResult<ImportReport> {
        // A non-array payload fails here, before any add is attempted.
        let items = parse_backup(payload)?;

        let mut report = ImportReport::default();
        for item in items {
            let record: JsonBookmarkRecord = match serde_json::from_value(item) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping malformed backup entry: {}", e);
                    report.skipped += 1;
                    continue;
                }
            };

            if record.url.trim().is_empty() || record.title.trim().is_empty() {
                warn!("Skipping backup entry without url or title");
                report.skipped += 1;
                continue;
            }

            // Each add is awaited before the next item is attempted.
            match self.repository.add(record.into_draft()).await {
                Ok(bookmark) => {
                    debug!("Imported {}", bookmark);
                    report.imported += 1;
                }
                Err(e @ (DomainError::DuplicateKey(_) | DomainError::InvalidInput(_))) => {
                    warn!("Skipping backup entry: {}", e);
                    report.skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(report)
    }
}
