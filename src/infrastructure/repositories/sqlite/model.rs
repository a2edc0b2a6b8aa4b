// src/infrastructure/repositories/sqlite/model.rs
use chrono::NaiveDateTime;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use std::fmt;

/// A row of the `bookmarks` table.
#[derive(Queryable, Identifiable, Clone, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::bookmarks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookmarkRow {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

/// Insert row. `id: None` lets SQLite assign the next rowid; an explicit id is
/// honoured and collides on the primary key if taken.
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::bookmarks)]
pub struct NewBookmarkRow {
    pub id: Option<i32>,
    pub url: String,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

impl fmt::Display for NewBookmarkRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, url: {}, title: {}, created_at: {}",
            self.id.map_or("auto".to_string(), |id| id.to_string()),
            self.url,
            self.title,
            self.created_at
        )
    }
}

/// Wholesale update of a bookmark row.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::bookmarks)]
pub struct BookmarkChanges {
    pub url: String,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

/// A row of the `bookmark_tags` index table: one row per tag occurrence,
/// `position` keeping the in-bookmark order.
#[derive(Queryable, Insertable, Clone, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::bookmark_tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TagRow {
    pub bookmark_id: i32,
    pub position: i32,
    pub tag: String,
}
