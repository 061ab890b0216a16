//! Listing view: search and filter over the songs table

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::pages;
use crate::db::{self, SongFilter};
use crate::AppState;

/// Listing query parameters; each defaults to empty when absent
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Substring to match against name, artist, or genre
    #[serde(default)]
    pub search: String,

    /// Exact genre to restrict to
    #[serde(default)]
    pub genre: String,

    /// Exact tuning to restrict to
    #[serde(default)]
    pub tuning: String,
}

/// GET /?search=...&genre=...&tuning=...
///
/// Renders the filtered song table plus the genre/tuning dropdown options.
/// Malformed query strings are treated as no filters at all.
pub async fn list_songs(
    State(state): State<AppState>,
    query: Option<Query<ListQuery>>,
) -> Result<Html<String>, ListError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let filter = SongFilter::new(&query.search, &query.genre, &query.tuning);

    let songs = db::list_songs(&state.db, &filter)
        .await
        .map_err(|e| ListError::DatabaseError(e.to_string()))?;

    // Dropdown options always cover the full table, not the filtered view
    let genres = db::distinct_genres(&state.db)
        .await
        .map_err(|e| ListError::DatabaseError(e.to_string()))?;
    let tunings = db::distinct_tunings(&state.db)
        .await
        .map_err(|e| ListError::DatabaseError(e.to_string()))?;

    Ok(Html(pages::render_index(
        &songs,
        &query,
        &genres,
        &tunings,
        &state.config.version,
    )))
}

/// Listing errors
#[derive(Debug)]
pub enum ListError {
    DatabaseError(String),
}

impl IntoResponse for ListError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ListError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
