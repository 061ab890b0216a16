//! chordbook library - password-gated song catalog over SQLite
//!
//! A thin CRUD surface: search/filter browsing of a single `songs` table,
//! with add and delete gated by a shared-secret hash comparison.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};

use config::AppConfig;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Immutable post-startup configuration (reference hash, version)
    pub config: AppConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        Self { db, config }
    }
}

/// Build application router
///
/// Reads are open; mutations check the `password` form field inside the
/// handler so missing and wrong secrets produce the same denial.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::catalog::list_songs))
        .route("/add", get(api::pages::add_form).post(api::songs::add_song))
        .route("/delete/:id", post(api::songs::delete_song))
        .merge(api::health::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
