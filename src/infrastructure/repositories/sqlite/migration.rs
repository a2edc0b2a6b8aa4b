// src/infrastructure/repositories/sqlite/migration.rs
use diesel_migrations::{embed_migrations, EmbeddedMigrations};

/// Schema version 1. Future migrations must be additive and preserve
/// existing records.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");
