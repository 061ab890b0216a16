//! Mutating song operations, gated by the shared secret

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::auth;
use crate::db::{self, NewSong};
use crate::AppState;

/// Form fields for creating a song.
///
/// All six song fields must be present in the request (axum's `Form`
/// rejection handles absence); only `name` is semantically required, the
/// rest may be submitted empty. `password` defaults to empty so a missing
/// field reaches the auth gate and is denied like a wrong one.
#[derive(Debug, Deserialize)]
pub struct AddSongForm {
    #[serde(default)]
    pub password: String,
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub tuning: String,
    pub link: String,
    pub note: String,
}

/// Form fields for deleting a song
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub password: String,
}

/// POST /add
///
/// Inserts a row with a database-assigned id and redirects to the listing.
pub async fn add_song(
    State(state): State<AppState>,
    Form(form): Form<AddSongForm>,
) -> Result<Redirect, MutationError> {
    authorize(&form.password, &state.config.password_hash)?;

    let song = NewSong {
        name: form.name,
        artist: form.artist,
        genre: form.genre,
        tuning: form.tuning,
        link: form.link,
        note: form.note,
    };
    db::insert_song(&state.db, &song)
        .await
        .map_err(|e| MutationError::DatabaseError(e.to_string()))?;

    Ok(Redirect::to("/"))
}

/// POST /delete/:id
///
/// Removes the matching row if any; an unknown id is a silent no-op.
/// Redirects to the listing either way.
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, MutationError> {
    authorize(&form.password, &state.config.password_hash)?;

    db::delete_song(&state.db, id)
        .await
        .map_err(|e| MutationError::DatabaseError(e.to_string()))?;

    Ok(Redirect::to("/"))
}

/// Check the submitted password against the reference hash.
///
/// Missing, empty, and wrong all produce the same `Unauthorized` denial so
/// no distinguishing signal leaks to an unauthenticated caller.
fn authorize(submitted: &str, reference_hash: &str) -> Result<(), MutationError> {
    if auth::verify_password(submitted, reference_hash) {
        Ok(())
    } else {
        warn!("Rejected mutation: missing or mismatched password");
        Err(MutationError::Unauthorized)
    }
}

/// Mutation errors
#[derive(Debug)]
pub enum MutationError {
    Unauthorized,
    DatabaseError(String),
}

impl IntoResponse for MutationError {
    fn into_response(self) -> Response {
        match self {
            // Fixed body, no detail
            MutationError::Unauthorized => {
                (StatusCode::FORBIDDEN, "Unauthorized").into_response()
            }
            MutationError::DatabaseError(msg) => {
                let body = Json(json!({
                    "error": format!("Database error: {}", msg),
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
