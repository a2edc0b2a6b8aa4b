// tests/test_service.rs
use favlink::application::services::{BookmarkService, BookmarkServiceImpl};
use favlink::domain::bookmark::BookmarkDraft;
use favlink::domain::search::{SearchQuery, TagFilter};
use favlink::domain::tag::Tag;
use favlink::infrastructure::repositories::SqliteBookmarkRepository;
use favlink::util::testing::init_test_logging;
use std::sync::Arc;
use tempfile::TempDir;

fn open_service(dir: &TempDir) -> BookmarkServiceImpl {
    init_test_logging();
    let db_path = dir.path().join("favlink.db");
    let repo = SqliteBookmarkRepository::from_url(db_path.to_str().unwrap()).unwrap();
    BookmarkServiceImpl::new(Arc::new(repo))
}

fn draft(url: &str, title: &str, tags: &[&str]) -> BookmarkDraft {
    let mut draft = BookmarkDraft::new(url, title);
    draft.tags = tags.iter().map(|t| Tag::new(t).unwrap()).collect();
    draft
}

#[tokio::test]
async fn given_mixed_store_when_list_then_filters_and_orders_newest_first() {
    let dir = TempDir::new().unwrap();
    let service = open_service(&dir);

    service
        .add_bookmark(draft("https://rust-lang.org", "Rust homepage", &["lang"]))
        .await
        .unwrap();
    service
        .add_bookmark(draft("https://crates.io", "Crates registry", &["lang", "pkg"]))
        .await
        .unwrap();
    service
        .add_bookmark(draft("https://news.example", "Daily news", &["press"]))
        .await
        .unwrap();

    // No filter: all three, newest first, insertion order on equal timestamps.
    let all = service
        .list_bookmarks(&SearchQuery::new("", TagFilter::All))
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    // Substring over the title, case-insensitive.
    let rust = service
        .list_bookmarks(&SearchQuery::new("RUST", TagFilter::All))
        .await
        .unwrap();
    assert_eq!(rust.len(), 1);
    assert_eq!(rust[0].title, "Rust homepage");

    // Substring over a tag value.
    let press = service
        .list_bookmarks(&SearchQuery::new("press", TagFilter::All))
        .await
        .unwrap();
    assert_eq!(press.len(), 1);

    // Tag filter narrows before text matching.
    let lang = service
        .list_bookmarks(&SearchQuery::new(
            "crates",
            TagFilter::Tag(Tag::new("lang").unwrap()),
        ))
        .await
        .unwrap();
    assert_eq!(lang.len(), 1);
    assert_eq!(lang[0].url, "https://crates.io");
}

#[tokio::test]
async fn given_store_when_export_then_import_restores_everything() {
    let dir = TempDir::new().unwrap();
    let service = open_service(&dir);

    let mut d = draft("https://rust-lang.org", "Rust", &["lang", "systems"]);
    d.description = "the language".to_string();
    service.add_bookmark(d).await.unwrap();
    service
        .add_bookmark(draft("https://crates.io", "Crates", &[]))
        .await
        .unwrap();

    let backup = service.export_bookmarks().await.unwrap();

    service.delete_all().await.unwrap();
    assert!(service
        .list_bookmarks(&SearchQuery::new("", TagFilter::All))
        .await
        .unwrap()
        .is_empty());

    let report = service.import_bookmarks(&backup).await.unwrap();
    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 0);

    let restored = service
        .list_bookmarks(&SearchQuery::new("", TagFilter::All))
        .await
        .unwrap();
    assert_eq!(restored.len(), 2);
    let rust = restored
        .iter()
        .find(|b| b.url == "https://rust-lang.org")
        .unwrap();
    assert_eq!(rust.description, "the language");
    assert_eq!(rust.formatted_tags(), "lang,systems");
}

#[tokio::test]
async fn given_backup_with_bad_entries_when_import_then_good_ones_still_land() {
    let dir = TempDir::new().unwrap();
    let service = open_service(&dir);

    let payload = r#"[
        {"id": 1, "url": "https://good.example", "title": "Good", "description": "", "tags": []},
        {"id": 1, "url": "https://dupe.example", "title": "Duplicate id", "description": "", "tags": []},
        {"url": "", "title": "No url", "description": "", "tags": []},
        "not an object",
        {"url": "https://nomad.example", "title": "No id is fine", "tags": ["t"]}
    ]"#;

    let report = service.import_bookmarks(payload).await.unwrap();
    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 3);

    let all = service
        .list_bookmarks(&SearchQuery::new("", TagFilter::All))
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn given_non_array_payload_when_import_then_rejected_wholesale() {
    let dir = TempDir::new().unwrap();
    let service = open_service(&dir);

    assert!(service.import_bookmarks("{}").await.is_err());
    assert!(service.import_bookmarks("nonsense").await.is_err());

    assert!(service
        .list_bookmarks(&SearchQuery::new("", TagFilter::All))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn given_tag_query_when_get_bookmarks_by_tag_then_exact_match_only() {
    let dir = TempDir::new().unwrap();
    let service = open_service(&dir);

    service
        .add_bookmark(draft("https://a.example", "A", &["rust"]))
        .await
        .unwrap();
    service
        .add_bookmark(draft("https://b.example", "B", &["rustacean"]))
        .await
        .unwrap();

    let hits = service
        .get_bookmarks_by_tag(&Tag::new("rust").unwrap())
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "https://a.example");
}
