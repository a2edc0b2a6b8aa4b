// src/domain/repositories/repository.rs
use crate::domain::bookmark::{Bookmark, BookmarkDraft};
use crate::domain::error::DomainResult;
use crate::domain::tag::Tag;
use async_trait::async_trait;

/// Repository trait for bookmark persistence.
///
/// Every operation is asynchronous and individually transactional: each call
/// is atomic with respect to its own index maintenance, but nothing is
/// guaranteed across separate calls. Callers wanting a fixed order must await
/// each operation before issuing the next. A failed operation leaves the
/// backing collection untouched.
#[async_trait]
pub trait BookmarkRepository: Send + Sync + std::fmt::Debug {
    /// Every live record, tags attached, no ordering guarantee.
    async fn get_all(&self) -> DomainResult<Vec<Bookmark>>;

    /// Point lookup by primary key.
    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Bookmark>>;

    /// Lookup through the multi-valued tag index.
    async fn get_by_tag(&self, tag: &Tag) -> DomainResult<Vec<Bookmark>>;

    /// Persist a new record. Assigns `id` and `created_at` when the draft
    /// leaves them out; fails with `DuplicateKey` when an explicit id
    /// collides, `InvalidInput` when url or title is empty.
    async fn add(&self, draft: BookmarkDraft) -> DomainResult<Bookmark>;

    /// Wholesale replace of an existing record, keyed by its id. Fails with
    /// `NotFound` when the id does not exist (no upsert). The caller carries
    /// `created_at` forward; the store does not protect it here.
    async fn update(&self, bookmark: Bookmark) -> DomainResult<Bookmark>;

    /// Remove a record and its tag index entries. Removing an absent id is
    /// not an error; returns whether a record was actually deleted.
    async fn delete(&self, id: i32) -> DomainResult<bool>;

    /// Remove all records and index entries in one transaction.
    async fn clear(&self) -> DomainResult<()>;
}
