// src/infrastructure/repositories/sqlite/repository.rs
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;
use itertools::Itertools;
use std::collections::HashMap;
use tracing::{debug, instrument};

use super::connection::{ConnectionPool, PooledConnection};
use super::error::{SqliteRepositoryError, SqliteResult};
use super::model::{BookmarkChanges, BookmarkRow, NewBookmarkRow, TagRow};
use super::schema::{bookmark_tags, bookmarks};
use crate::domain::bookmark::{Bookmark, BookmarkDraft};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::BookmarkRepository;
use crate::domain::tag::Tag;

/// SQLite-backed bookmark store.
///
/// Holds a cloneable r2d2 pool; every operation checks a connection out,
/// runs inside its own transaction on the blocking pool, and releases it.
#[derive(Clone, Debug)]
pub struct SqliteBookmarkRepository {
    pool: ConnectionPool,
}

impl SqliteBookmarkRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at the given path and run pending
    /// migrations.
    #[instrument(skip_all, level = "debug")]
    pub fn from_url(database_url: &str) -> SqliteResult<Self> {
        let pool = super::connection::init_pool(database_url)?;
        Ok(Self { pool })
    }

    pub fn get_connection(&self) -> SqliteResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
    }

    /// Run a blocking repository closure on the tokio blocking pool.
    async fn run<T, F>(&self, op: F) -> DomainResult<T>
    where
        F: FnOnce(ConnectionPool) -> SqliteResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let result = tokio::task::spawn_blocking(move || op(pool))
            .await
            .map_err(|e| DomainError::StorageUnavailable(format!("storage task failed: {}", e)))?;
        result.map_err(DomainError::from)
    }
}

#[async_trait::async_trait]
impl BookmarkRepository for SqliteBookmarkRepository {
    #[instrument(skip_all, level = "debug")]
    async fn get_all(&self) -> DomainResult<Vec<Bookmark>> {
        self.run(|pool| get_all_sync(&pool)).await
    }

    #[instrument(skip_all, level = "debug")]
    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Bookmark>> {
        self.run(move |pool| get_by_id_sync(&pool, id)).await
    }

    #[instrument(skip_all, level = "debug")]
    async fn get_by_tag(&self, tag: &Tag) -> DomainResult<Vec<Bookmark>> {
        let tag = tag.clone();
        self.run(move |pool| get_by_tag_sync(&pool, &tag)).await
    }

    #[instrument(skip_all, level = "debug")]
    async fn add(&self, draft: BookmarkDraft) -> DomainResult<Bookmark> {
        draft.validate()?;
        self.run(move |pool| add_sync(&pool, draft)).await
    }

    #[instrument(skip_all, level = "debug")]
    async fn update(&self, bookmark: Bookmark) -> DomainResult<Bookmark> {
        let id = bookmark
            .id
            .ok_or_else(|| DomainError::InvalidInput("bookmark has no id".to_string()))?;
        if bookmark.url.trim().is_empty() {
            return Err(DomainError::InvalidInput("url must not be empty".to_string()));
        }
        if bookmark.title.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "title must not be empty".to_string(),
            ));
        }
        self.run(move |pool| update_sync(&pool, id, bookmark)).await
    }

    #[instrument(skip_all, level = "debug")]
    async fn delete(&self, id: i32) -> DomainResult<bool> {
        self.run(move |pool| delete_sync(&pool, id)).await
    }

    #[instrument(skip_all, level = "debug")]
    async fn clear(&self) -> DomainResult<()> {
        self.run(|pool| clear_sync(&pool)).await
    }
}

fn checkout(pool: &ConnectionPool) -> SqliteResult<PooledConnection> {
    pool.get()
        .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
}

fn get_all_sync(pool: &ConnectionPool) -> SqliteResult<Vec<Bookmark>> {
    let mut conn = checkout(pool)?;

    let rows = bookmarks::table
        .order(bookmarks::id.asc())
        .load::<BookmarkRow>(&mut conn)?;

    attach_tags(&mut conn, rows)
}

fn get_by_id_sync(pool: &ConnectionPool, id: i32) -> SqliteResult<Option<Bookmark>> {
    let mut conn = checkout(pool)?;

    let row = bookmarks::table
        .filter(bookmarks::id.eq(id))
        .first::<BookmarkRow>(&mut conn)
        .optional()?;

    match row {
        Some(row) => Ok(attach_tags(&mut conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

fn get_by_tag_sync(pool: &ConnectionPool, tag: &Tag) -> SqliteResult<Vec<Bookmark>> {
    let mut conn = checkout(pool)?;

    let ids: Vec<i32> = bookmark_tags::table
        .filter(bookmark_tags::tag.eq(tag.value()))
        .select(bookmark_tags::bookmark_id)
        .distinct()
        .load(&mut conn)?;

    let rows = bookmarks::table
        .filter(bookmarks::id.eq_any(&ids))
        .order(bookmarks::id.asc())
        .load::<BookmarkRow>(&mut conn)?;

    attach_tags(&mut conn, rows)
}

fn add_sync(pool: &ConnectionPool, draft: BookmarkDraft) -> SqliteResult<Bookmark> {
    let mut conn = checkout(pool)?;

    conn.transaction::<Bookmark, SqliteRepositoryError, _>(|conn| {
        let created_at = draft.created_at.unwrap_or_else(Utc::now);
        let row = NewBookmarkRow {
            id: draft.id,
            url: draft.url.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            created_at: created_at.naive_utc(),
        };
        debug!("Inserting bookmark: {}", row);

        match diesel::insert_into(bookmarks::table).values(&row).execute(conn) {
            Ok(_) => {}
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)) => {
                return Err(match draft.id {
                    Some(id) => SqliteRepositoryError::DuplicateId(id),
                    None => DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
                        .into(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        let id = match draft.id {
            Some(id) => id,
            None => diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                .get_result::<i32>(conn)?,
        };

        insert_tag_rows(conn, id, &draft.tags)?;

        Ok(Bookmark {
            id: Some(id),
            url: draft.url,
            title: draft.title,
            description: draft.description,
            tags: draft.tags,
            created_at: Some(created_at),
        })
    })
}

fn update_sync(pool: &ConnectionPool, id: i32, bookmark: Bookmark) -> SqliteResult<Bookmark> {
    let mut conn = checkout(pool)?;

    conn.transaction::<Bookmark, SqliteRepositoryError, _>(|conn| {
        let created_at = bookmark.created_at.unwrap_or_else(Utc::now);
        let changes = BookmarkChanges {
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            description: bookmark.description.clone(),
            created_at: created_at.naive_utc(),
        };

        let affected = diesel::update(bookmarks::table.filter(bookmarks::id.eq(id)))
            .set(&changes)
            .execute(conn)?;

        if affected == 0 {
            return Err(SqliteRepositoryError::BookmarkNotFound(id));
        }

        // Re-point the tag index at the new tag set.
        diesel::delete(bookmark_tags::table.filter(bookmark_tags::bookmark_id.eq(id)))
            .execute(conn)?;
        insert_tag_rows(conn, id, &bookmark.tags)?;

        Ok(Bookmark {
            created_at: Some(created_at),
            ..bookmark
        })
    })
}

fn delete_sync(pool: &ConnectionPool, id: i32) -> SqliteResult<bool> {
    let mut conn = checkout(pool)?;

    conn.transaction::<bool, SqliteRepositoryError, _>(|conn| {
        diesel::delete(bookmark_tags::table.filter(bookmark_tags::bookmark_id.eq(id)))
            .execute(conn)?;
        let affected =
            diesel::delete(bookmarks::table.filter(bookmarks::id.eq(id))).execute(conn)?;
        Ok(affected > 0)
    })
}

fn clear_sync(pool: &ConnectionPool) -> SqliteResult<()> {
    let mut conn = checkout(pool)?;

    conn.transaction::<(), SqliteRepositoryError, _>(|conn| {
        diesel::delete(bookmark_tags::table).execute(conn)?;
        diesel::delete(bookmarks::table).execute(conn)?;
        Ok(())
    })
}

/// Write one `bookmark_tags` row per tag occurrence.
fn insert_tag_rows(conn: &mut SqliteConnection, id: i32, tags: &[Tag]) -> Result<(), DieselError> {
    let rows: Vec<TagRow> = tags
        .iter()
        .enumerate()
        .map(|(position, tag)| TagRow {
            bookmark_id: id,
            position: position as i32,
            tag: tag.value().to_string(),
        })
        .collect();

    if !rows.is_empty() {
        diesel::insert_into(bookmark_tags::table)
            .values(&rows)
            .execute(conn)?;
    }
    Ok(())
}

/// Load the tag rows for the given bookmark rows and assemble domain
/// entities. Tag order follows the stored `position`.
fn attach_tags(
    conn: &mut SqliteConnection,
    rows: Vec<BookmarkRow>,
) -> SqliteResult<Vec<Bookmark>> {
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();

    let tag_rows: Vec<TagRow> = bookmark_tags::table
        .filter(bookmark_tags::bookmark_id.eq_any(&ids))
        .order((
            bookmark_tags::bookmark_id.asc(),
            bookmark_tags::position.asc(),
        ))
        .load(conn)?;

    let mut grouped: HashMap<i32, Vec<String>> = tag_rows
        .into_iter()
        .map(|r| (r.bookmark_id, r.tag))
        .into_group_map();

    rows.into_iter()
        .map(|row| {
            let tags = grouped.remove(&row.id).unwrap_or_default();
            to_domain(row, tags)
        })
        .collect()
}

fn to_domain(row: BookmarkRow, tags: Vec<String>) -> SqliteResult<Bookmark> {
    let tags = tags
        .iter()
        .map(|t| Tag::new(t))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            SqliteRepositoryError::ConversionError(format!(
                "invalid stored tag for bookmark {}: {}",
                row.id, e
            ))
        })?;

    Ok(Bookmark {
        id: Some(row.id),
        url: row.url,
        title: row.title,
        description: row.description,
        tags,
        created_at: Some(DateTime::from_naive_utc_and_offset(row.created_at, Utc)),
    })
}
