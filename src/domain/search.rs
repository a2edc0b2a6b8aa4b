// src/domain/search.rs
//
// The caller-side query/filter contract. Search, tag filtering and sorting run
// over `get_all()` output in the collaborator layer; the store itself imposes
// no ordering.
use crate::domain::bookmark::Bookmark;
use crate::domain::error::DomainResult;
use crate::domain::tag::Tag;

/// Tag membership filter. `All` is the "all" sentinel and disables filtering.
#[derive(Clone, Debug, PartialEq)]
pub enum TagFilter {
    All,
    Tag(Tag),
}

impl TagFilter {
    /// Parse a user-supplied filter value. `"all"` (any casing) selects the
    /// sentinel; anything else must be a valid tag.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(TagFilter::All);
        }
        Ok(TagFilter::Tag(Tag::new(raw)?))
    }
}

/// A collaborator query: substring text match plus an exact tag filter.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    pub text: String,
    pub tag: TagFilter,
}

impl SearchQuery {
    pub fn new<S: Into<String>>(text: S, tag: TagFilter) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    /// Match-all query: empty text, no tag filter.
    pub fn match_all() -> Self {
        Self::new("", TagFilter::All)
    }

    /// Case-insensitive substring match against title, url and every tag.
    /// An empty query text matches all bookmarks.
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        let text_match = if self.text.trim().is_empty() {
            true
        } else {
            let needle = self.text.to_lowercase();
            bookmark.title.to_lowercase().contains(&needle)
                || bookmark.url.to_lowercase().contains(&needle)
                || bookmark.tags.iter().any(|t| t.value().contains(&needle))
        };

        let tag_match = match &self.tag {
            TagFilter::All => true,
            TagFilter::Tag(tag) => bookmark.has_tag(tag),
        };

        text_match && tag_match
    }

    /// Apply the full contract: filter, then sort by `created_at` descending.
    /// The sort is stable, so bookmarks sharing a timestamp keep their
    /// insertion order.
    pub fn apply(&self, mut bookmarks: Vec<Bookmark>) -> Vec<Bookmark> {
        bookmarks.retain(|b| self.matches(b));
        bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookmarks
    }
}
