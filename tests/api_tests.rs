//! Integration tests for the chordbook HTTP surface
//!
//! Tests cover:
//! - Listing with search/genre/tuning filters
//! - Add and delete round trips (redirects, row counts, id assignment)
//! - Framework-level failures for malformed mutation requests
//! - Health endpoint

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chordbook::config::AppConfig;
use chordbook::db::NewSong;
use chordbook::{auth, build_router, AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

const TEST_PASSWORD: &str = "test-password";

/// Test helper: In-memory database with the songs schema
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Should create in-memory pool");

    chordbook::db::create_songs_table(&pool)
        .await
        .expect("Should create schema");

    pool
}

/// Test helper: Create app with test state
fn setup_app(db: SqlitePool) -> axum::Router {
    let config = AppConfig {
        password_hash: auth::sha256_hex(TEST_PASSWORD),
        version: "test".to_string(),
    };
    build_router(AppState::new(db, config))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Form body for POST /add; field values must be pre-urlencoded
fn add_body(password: &str, name: &str, artist: &str, genre: &str, tuning: &str) -> String {
    format!(
        "password={}&name={}&artist={}&genre={}&tuning={}&link=&note=",
        password, name, artist, genre, tuning
    )
}

async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn insert(pool: &SqlitePool, name: &str, artist: &str, genre: &str, tuning: &str) -> i64 {
    chordbook::db::insert_song(
        pool,
        &NewSong {
            name: name.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            tuning: tuning.to_string(),
            link: String::new(),
            note: String::new(),
        },
    )
    .await
    .expect("Should insert song")
}

async fn row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await
        .expect("Should count rows")
}

// =============================================================================
// Listing and Filter Tests
// =============================================================================

#[tokio::test]
async fn test_listing_empty_catalog() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response.into_body()).await;
    assert!(page.contains("chordbook vtest"));
}

#[tokio::test]
async fn test_genre_filter_exact_match() {
    let db = setup_test_db().await;
    insert(&db, "Song A", "", "Rock", "EADGBE").await;
    insert(&db, "Song B", "", "Jazz", "EADGBE").await;
    let app = setup_app(db);

    let response = app.clone().oneshot(get("/?genre=Rock")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response.into_body()).await;
    assert!(page.contains("Song A"));
    assert!(!page.contains("Song B"));

    let response = app.oneshot(get("/?genre=Jazz")).await.unwrap();
    let page = body_text(response.into_body()).await;
    assert!(!page.contains("Song A"));
    assert!(page.contains("Song B"));
}

#[tokio::test]
async fn test_genre_filter_is_case_sensitive_exact() {
    let db = setup_test_db().await;
    insert(&db, "Song A", "", "Rock", "").await;
    let app = setup_app(db);

    let response = app.oneshot(get("/?genre=rock")).await.unwrap();
    let page = body_text(response.into_body()).await;
    assert!(!page.contains("Song A"));
}

#[tokio::test]
async fn test_search_matches_substring_not_prefix() {
    let db = setup_test_db().await;
    insert(&db, "My Song Title", "", "", "").await;
    let app = setup_app(db);

    let response = app.oneshot(get("/?search=Song")).await.unwrap();
    let page = body_text(response.into_body()).await;
    assert!(page.contains("My Song Title"));
}

#[tokio::test]
async fn test_search_matches_artist_and_genre_columns() {
    let db = setup_test_db().await;
    insert(&db, "First", "Windmill Trio", "", "").await;
    insert(&db, "Second", "", "Progressive", "").await;
    insert(&db, "Third", "Nobody", "Blues", "").await;
    let app = setup_app(db);

    let response = app.clone().oneshot(get("/?search=mill")).await.unwrap();
    let page = body_text(response.into_body()).await;
    assert!(page.contains("First"));
    assert!(!page.contains("Third"));

    let response = app.oneshot(get("/?search=gressive")).await.unwrap();
    let page = body_text(response.into_body()).await;
    assert!(page.contains("Second"));
    assert!(!page.contains("Third"));
}

#[tokio::test]
async fn test_empty_search_returns_all_songs() {
    let db = setup_test_db().await;
    insert(&db, "Song A", "", "Rock", "").await;
    insert(&db, "Song B", "", "Jazz", "").await;
    let app = setup_app(db);

    let response = app.oneshot(get("/?search=")).await.unwrap();
    let page = body_text(response.into_body()).await;
    assert!(page.contains("Song A"));
    assert!(page.contains("Song B"));
}

#[tokio::test]
async fn test_combined_filters_intersect() {
    let db = setup_test_db().await;
    insert(&db, "Keeper", "", "Rock", "EADGBE").await;
    insert(&db, "Wrong Tuning", "", "Rock", "DADGAD").await;
    insert(&db, "Wrong Genre", "", "Jazz", "EADGBE").await;
    let app = setup_app(db);

    let response = app
        .oneshot(get("/?search=e&genre=Rock&tuning=EADGBE"))
        .await
        .unwrap();
    let page = body_text(response.into_body()).await;
    assert!(page.contains("Keeper"));
    assert!(!page.contains("Wrong Tuning"));
    assert!(!page.contains("Wrong Genre"));
}

#[tokio::test]
async fn test_dropdowns_ignore_active_filter() {
    let db = setup_test_db().await;
    insert(&db, "Song A", "", "Rock", "EADGBE").await;
    insert(&db, "Song B", "", "Jazz", "DADGAD").await;
    let app = setup_app(db);

    // Filtering to Rock must still offer Jazz and DADGAD as options
    let response = app.oneshot(get("/?genre=Rock")).await.unwrap();
    let page = body_text(response.into_body()).await;
    assert!(page.contains("<option value=\"Jazz\">"));
    assert!(page.contains("<option value=\"DADGAD\">"));
}

// =============================================================================
// Add Tests
// =============================================================================

#[tokio::test]
async fn test_add_song_redirects_and_inserts() {
    let db = setup_test_db().await;
    let app = setup_app(db.clone());

    let body = add_body(TEST_PASSWORD, "Song+A", "The+Band", "Rock", "EADGBE");
    let response = app.oneshot(post_form("/add", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(row_count(&db).await, 1);
}

#[tokio::test]
async fn test_add_song_missing_name_field_is_client_error() {
    let db = setup_test_db().await;
    let app = setup_app(db.clone());

    // All fields except `name` present
    let body = format!(
        "password={}&artist=&genre=Rock&tuning=&link=&note=",
        TEST_PASSWORD
    );
    let response = app.oneshot(post_form("/add", &body)).await.unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(row_count(&db).await, 0);
}

#[tokio::test]
async fn test_add_form_page_served() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(get("/add")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response.into_body()).await;
    assert!(page.contains("action=\"/add\""));
    assert!(page.contains("name=\"password\""));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[tokio::test]
async fn test_delete_removes_exactly_one_row() {
    let db = setup_test_db().await;
    let first = insert(&db, "Song A", "", "", "").await;
    insert(&db, "Song B", "", "", "").await;
    let app = setup_app(db.clone());

    let response = app
        .oneshot(post_form(
            &format!("/delete/{}", first),
            &format!("password={}", TEST_PASSWORD),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(row_count(&db).await, 1);

    let remaining: String = sqlx::query_scalar("SELECT name FROM songs")
        .fetch_one(&db)
        .await
        .unwrap();
    assert_eq!(remaining, "Song B");
}

#[tokio::test]
async fn test_deleted_id_is_never_reassigned() {
    let db = setup_test_db().await;
    let first = insert(&db, "Song A", "", "", "").await;
    let app = setup_app(db.clone());

    let response = app
        .oneshot(post_form(
            &format!("/delete/{}", first),
            &format!("password={}", TEST_PASSWORD),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let second = insert(&db, "Song B", "", "", "").await;
    assert!(second > first);
}

#[tokio::test]
async fn test_delete_nonexistent_id_is_silent_noop() {
    let db = setup_test_db().await;
    insert(&db, "Song A", "", "", "").await;
    let app = setup_app(db.clone());

    let response = app
        .oneshot(post_form(
            "/delete/9999",
            &format!("password={}", TEST_PASSWORD),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(row_count(&db).await, 1);
}

#[tokio::test]
async fn test_delete_non_integer_id_is_client_error() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .oneshot(post_form(
            "/delete/not-a-number",
            &format!("password={}", TEST_PASSWORD),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "chordbook");
    assert!(body["version"].is_string());
}
