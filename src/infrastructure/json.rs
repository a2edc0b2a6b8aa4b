// src/infrastructure/json.rs
//
// The JSON backup format. Field names are fixed: `id`, `url`, `title`,
// `description`, `tags`, `createdAt` (RFC 3339).
use crate::domain::bookmark::{Bookmark, BookmarkDraft};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tag::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One bookmark record as it appears in a backup file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JsonBookmarkRecord {
    #[serde(default)]
    pub id: Option<i32>,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl JsonBookmarkRecord {
    pub fn from_domain(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id,
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            description: bookmark.description.clone(),
            tags: bookmark.tags.iter().map(|t| t.value().to_string()).collect(),
            created_at: bookmark.created_at,
        }
    }

    pub fn from_domain_collection(bookmarks: &[Bookmark]) -> Vec<Self> {
        bookmarks.iter().map(Self::from_domain).collect()
    }

    /// Turn a backup record into an add candidate. Invalid tags are dropped
    /// with a warning instead of failing the item.
    pub fn into_draft(self) -> BookmarkDraft {
        let tags = self
            .tags
            .iter()
            .filter_map(|raw| match Tag::new(raw) {
                Ok(tag) => Some(tag),
                Err(e) => {
                    warn!("Skipping invalid tag {:?}: {}", raw, e);
                    None
                }
            })
            .collect();

        BookmarkDraft {
            id: self.id,
            url: self.url,
            title: self.title,
            description: self.description,
            tags,
            created_at: self.created_at,
        }
    }
}

/// Serialize bookmarks to a pretty-printed JSON array.
pub fn to_json_array(bookmarks: &[Bookmark]) -> DomainResult<String> {
    let views = JsonBookmarkRecord::from_domain_collection(bookmarks);
    serde_json::to_string_pretty(&views)
        .map_err(|e| DomainError::Serialization(format!("failed to serialize bookmarks: {}", e)))
}

/// Parse a backup payload. The top level must be a JSON array; anything else
/// is rejected wholesale before any item is looked at. Items are returned as
/// raw values so a malformed entry skips that entry only.
pub fn parse_backup(payload: &str) -> DomainResult<Vec<serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| DomainError::InvalidInput(format!("invalid JSON: {}", e)))?;

    match value {
        serde_json::Value::Array(items) => Ok(items),
        _ => Err(DomainError::InvalidInput(
            "expected a top-level JSON array of bookmarks".to_string(),
        )),
    }
}
