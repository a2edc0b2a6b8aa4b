// src/domain/tag.rs
use crate::domain::error::{DomainError, DomainResult};
use std::fmt;

/// A validated tag value.
///
/// Tags are normalized on construction: trimmed and lowercased. The same
/// normalization is applied by the search filter, so a tag always compares
/// equal to itself no matter where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: &str) -> DomainResult<Self> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidInput(
                "tag must not be empty".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Parse a comma separated tag list, e.g. "rust, web,tools".
    ///
    /// Empty segments are skipped; order and duplicates of the remaining
    /// values are preserved.
    pub fn parse_list(input: &str) -> Vec<Tag> {
        input
            .split(',')
            .filter_map(|part| Tag::new(part).ok())
            .collect()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_case_and_whitespace() {
        let tag = Tag::new("  Rust ").unwrap();
        assert_eq!(tag.value(), "rust");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("   ").is_err());
    }

    #[test]
    fn test_parse_list_keeps_order_and_duplicates() {
        let tags = Tag::parse_list("web,rust, web ,,tools");
        let values: Vec<&str> = tags.iter().map(Tag::value).collect();
        assert_eq!(values, vec!["web", "rust", "web", "tools"]);
    }

    #[test]
    fn test_parse_list_empty_input() {
        assert!(Tag::parse_list("").is_empty());
        assert!(Tag::parse_list(" , ,").is_empty());
    }
}
