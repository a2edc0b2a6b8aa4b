// src/domain/bookmark.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tag::Tag;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use itertools::Itertools;
use std::fmt;

/// A stored bookmark.
///
/// `id` and `created_at` are `None` only before the record has been persisted;
/// the store assigns both on insert when absent and never rewrites them
/// afterwards. Tags keep their insertion order, duplicates included.
#[derive(Clone, Debug, PartialEq)]
pub struct Bookmark {
    pub id: Option<i32>,
    pub url: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Bookmark {
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Tags joined with commas, for display.
    pub fn formatted_tags(&self) -> String {
        self.tags.iter().map(Tag::value).join(",")
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bookmark[{}]: {} ({})",
            self.id.map_or("new".to_string(), |id| id.to_string()),
            self.title,
            self.url
        )
    }
}

/// Candidate for an `add` operation: a partial bookmark.
///
/// `id` and `created_at` may be supplied (backup restore keeps both) or left
/// for the store to assign.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(setter(into), default)]
pub struct BookmarkDraft {
    pub id: Option<i32>,
    pub url: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub created_at: Option<DateTime<Utc>>,
}

impl BookmarkDraft {
    pub fn new<S: Into<String>>(url: S, title: S) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Check the required fields. `url` and `title` must be non-empty after
    /// trimming.
    pub fn validate(&self) -> DomainResult<()> {
        if self.url.trim().is_empty() {
            return Err(DomainError::InvalidInput("url must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<BookmarkDraftBuilderError> for DomainError {
    fn from(e: BookmarkDraftBuilderError) -> Self {
        DomainError::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_required_fields() {
        let draft = BookmarkDraft::new("https://example.com", "Example");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let draft = BookmarkDraft::new("  ", "Example");
        assert!(matches!(
            draft.validate(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let draft = BookmarkDraft::new("https://example.com", "");
        assert!(matches!(
            draft.validate(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let draft = BookmarkDraftBuilder::default()
            .url("https://example.com")
            .title("Example")
            .build()
            .unwrap();
        assert_eq!(draft.id, None);
        assert_eq!(draft.description, "");
        assert!(draft.tags.is_empty());
        assert!(draft.created_at.is_none());
    }

    #[test]
    fn test_formatted_tags() {
        let bookmark = Bookmark {
            id: Some(1),
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
            description: String::new(),
            tags: vec![Tag::new("rust").unwrap(), Tag::new("web").unwrap()],
            created_at: Some(Utc::now()),
        };
        assert_eq!(bookmark.formatted_tags(), "rust,web");
    }
}
