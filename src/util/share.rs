// src/util/share.rs
//
// Share-target ingestion: a shared link arrives as a URL whose query string
// carries `title`, `text` and `url` parameters. Parsing it pre-fills an add
// candidate; it is not itself a store operation.
use crate::domain::bookmark::BookmarkDraft;
use crate::domain::error::{DomainError, DomainResult};
use url::Url;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareTarget {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
}

impl ShareTarget {
    /// Extract the share parameters from a share-target URL. Empty values
    /// count as absent.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let parsed = Url::parse(raw)
            .map_err(|e| DomainError::InvalidInput(format!("invalid share URL: {}", e)))?;

        let mut target = ShareTarget::default();
        for (key, value) in parsed.query_pairs() {
            if value.trim().is_empty() {
                continue;
            }
            match key.as_ref() {
                "title" => target.title = Some(value.into_owned()),
                "text" => target.text = Some(value.into_owned()),
                "url" => target.url = Some(value.into_owned()),
                _ => {}
            }
        }
        Ok(target)
    }

    /// Build an add candidate from the shared values. Some platforms put the
    /// link into `text` instead of `url`, so `text` stands in when `url` is
    /// absent. The title falls back to the link itself.
    pub fn into_draft(self) -> DomainResult<BookmarkDraft> {
        let url = self
            .url
            .or(self.text)
            .ok_or_else(|| DomainError::InvalidInput("share carries no link".to_string()))?;
        let title = self.title.unwrap_or_else(|| url.clone());
        Ok(BookmarkDraft::new(url, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_parameters() {
        let target = ShareTarget::parse(
            "https://app.example/share-target?title=Rust&text=The+language&url=https%3A%2F%2Frust-lang.org",
        )
        .unwrap();
        assert_eq!(target.title.as_deref(), Some("Rust"));
        assert_eq!(target.text.as_deref(), Some("The language"));
        assert_eq!(target.url.as_deref(), Some("https://rust-lang.org"));
    }

    #[test]
    fn test_parse_ignores_empty_and_unknown() {
        let target =
            ShareTarget::parse("https://app.example/share-target?title=&foo=bar&url=https%3A%2F%2Fa")
                .unwrap();
        assert_eq!(target.title, None);
        assert_eq!(target.url.as_deref(), Some("https://a"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ShareTarget::parse("not a url").is_err());
    }

    #[test]
    fn test_into_draft_prefers_url_over_text() {
        let target = ShareTarget {
            title: Some("T".to_string()),
            text: Some("https://text".to_string()),
            url: Some("https://url".to_string()),
        };
        let draft = target.into_draft().unwrap();
        assert_eq!(draft.url, "https://url");
        assert_eq!(draft.title, "T");
    }

    #[test]
    fn test_into_draft_text_stands_in_for_url() {
        let target = ShareTarget {
            title: None,
            text: Some("https://text".to_string()),
            url: None,
        };
        let draft = target.into_draft().unwrap();
        assert_eq!(draft.url, "https://text");
        assert_eq!(draft.title, "https://text");
    }

    #[test]
    fn test_into_draft_requires_a_link() {
        let target = ShareTarget {
            title: Some("T".to_string()),
            text: None,
            url: None,
        };
        assert!(target.into_draft().is_err());
    }
}
