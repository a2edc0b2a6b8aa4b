// src/cli/display.rs
use crate::domain::bookmark::Bookmark;

/// Render one bookmark as a short block for terminal output.
pub fn format_bookmark(bookmark: &Bookmark) -> String {
    let mut out = format!(
        "[{}] {}\n    {}",
        bookmark.id.map_or("?".to_string(), |id| id.to_string()),
        bookmark.title,
        bookmark.url
    );

    if !bookmark.description.is_empty() {
        out.push_str(&format!("\n    {}", bookmark.description));
    }

    if !bookmark.tags.is_empty() {
        let tags = bookmark
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("\n    {}", tags));
    }

    if let Some(created_at) = bookmark.created_at {
        out.push_str(&format!(
            "\n    added {}",
            created_at.format("%Y-%m-%d %H:%M")
        ));
    }

    out
}

pub fn print_bookmarks(bookmarks: &[Bookmark]) {
    for bookmark in bookmarks {
        println!("{}\n", format_bookmark(bookmark));
    }
    eprintln!("{} bookmark(s)", bookmarks.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag::Tag;

    #[test]
    fn test_format_bookmark_contains_fields() {
        let bookmark = Bookmark {
            id: Some(3),
            url: "https://rust-lang.org".to_string(),
            title: "Rust".to_string(),
            description: "The language".to_string(),
            tags: vec![Tag::new("rust").unwrap()],
            created_at: Some("2026-01-02T03:04:05Z".parse().unwrap()),
        };

        let rendered = format_bookmark(&bookmark);
        assert!(rendered.contains("[3] Rust"));
        assert!(rendered.contains("https://rust-lang.org"));
        assert!(rendered.contains("The language"));
        assert!(rendered.contains("#rust"));
        assert!(rendered.contains("2026-01-02"));
    }

    #[test]
    fn test_format_bookmark_skips_empty_sections() {
        let bookmark = Bookmark {
            id: Some(1),
            url: "https://a".to_string(),
            title: "A".to_string(),
            description: String::new(),
            tags: vec![],
            created_at: None,
        };

        let rendered = format_bookmark(&bookmark);
        assert!(!rendered.contains('#'));
        assert!(!rendered.contains("added"));
    }
}
