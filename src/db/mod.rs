//! Database access layer for chordbook
//!
//! A single `songs` table in a single-file SQLite database. The pool is
//! created once at startup; every statement checks out its own short-lived
//! connection and commits implicitly. Cross-writer consistency is delegated
//! to SQLite's own locking.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

pub mod songs;
pub use songs::{
    delete_song, distinct_genres, distinct_tunings, insert_song, list_songs, NewSong, Song,
    SongFilter,
};

/// Open (creating if needed) the database file and ensure the schema exists
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // mode=rwc: create the database file on first run
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new().connect(&db_url).await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_songs_table(&pool).await?;

    Ok(pool)
}

/// Create the songs table (create-if-absent; never migrates existing schema)
///
/// Ids are AUTOINCREMENT so a deleted id is never reassigned to a later row.
pub async fn create_songs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            artist TEXT,
            genre TEXT,
            tuning TEXT,
            link TEXT,
            note TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
