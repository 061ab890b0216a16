//! Song queries: filtered listing, dropdown option lists, insert and delete
//!
//! All values are bound as parameters, never interpolated into SQL text.

use crate::Result;
use sqlx::SqlitePool;

/// A catalog row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Song {
    pub id: i64,
    pub name: String,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub tuning: Option<String>,
    pub link: Option<String>,
    pub note: Option<String>,
}

/// Fields for a new row (the id is assigned by the database)
#[derive(Debug, Clone)]
pub struct NewSong {
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub tuning: String,
    pub link: String,
    pub note: String,
}

/// Optional listing predicates. An absent predicate means "no restriction",
/// not "match empty"; all present predicates are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct SongFilter {
    /// Substring match against name, artist, or genre (OR-combined)
    pub search: Option<String>,
    /// Exact genre match
    pub genre: Option<String>,
    /// Exact tuning match
    pub tuning: Option<String>,
}

impl SongFilter {
    /// Build a filter from raw query-string values, treating empty strings
    /// as absent
    pub fn new(search: &str, genre: &str, tuning: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            search: non_empty(search),
            genre: non_empty(genre),
            tuning: non_empty(tuning),
        }
    }
}

/// Translate a filter into a parameterized WHERE clause.
///
/// Returns the clause (empty when no predicates are present, otherwise
/// leading with ` WHERE `) and the bind parameters in placeholder order.
fn filter_clause(filter: &SongFilter) -> (String, Vec<String>) {
    let mut conditions: Vec<&str> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(search) = &filter.search {
        conditions.push("(name LIKE ? OR artist LIKE ? OR genre LIKE ?)");
        let pattern = format!("%{}%", search);
        params.push(pattern.clone());
        params.push(pattern.clone());
        params.push(pattern);
    }
    if let Some(genre) = &filter.genre {
        conditions.push("genre = ?");
        params.push(genre.clone());
    }
    if let Some(tuning) = &filter.tuning {
        conditions.push("tuning = ?");
        params.push(tuning.clone());
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    (clause, params)
}

/// Fetch all songs matching the filter, in natural storage order
pub async fn list_songs(pool: &SqlitePool, filter: &SongFilter) -> Result<Vec<Song>> {
    let (clause, params) = filter_clause(filter);
    let sql = format!(
        "SELECT id, name, artist, genre, tuning, link, note FROM songs{}",
        clause
    );

    let mut query = sqlx::query_as::<_, Song>(&sql);
    for param in params {
        query = query.bind(param);
    }

    Ok(query.fetch_all(pool).await?)
}

/// Sorted distinct non-empty genre values, for the filter dropdown.
/// Always computed over the full table, ignoring the active filter.
pub async fn distinct_genres(pool: &SqlitePool) -> Result<Vec<String>> {
    let genres = sqlx::query_scalar(
        "SELECT DISTINCT genre FROM songs WHERE genre IS NOT NULL AND genre != '' ORDER BY genre",
    )
    .fetch_all(pool)
    .await?;

    Ok(genres)
}

/// Sorted distinct non-empty tuning values, for the filter dropdown
pub async fn distinct_tunings(pool: &SqlitePool) -> Result<Vec<String>> {
    let tunings = sqlx::query_scalar(
        "SELECT DISTINCT tuning FROM songs WHERE tuning IS NOT NULL AND tuning != '' ORDER BY tuning",
    )
    .fetch_all(pool)
    .await?;

    Ok(tunings)
}

/// Insert a new song, returning its assigned id
pub async fn insert_song(pool: &SqlitePool, song: &NewSong) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO songs (name, artist, genre, tuning, link, note) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&song.name)
    .bind(&song.artist)
    .bind(&song.genre)
    .bind(&song.tuning)
    .bind(&song.link)
    .bind(&song.note)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a song by id, returning the number of rows removed.
/// Deleting an id that does not exist is a silent no-op (returns 0).
pub async fn delete_song(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
