//! HTTP API handlers for chordbook

pub mod catalog;
pub mod health;
pub mod pages;
pub mod songs;

pub use catalog::list_songs;
pub use health::health_routes;
pub use pages::add_form;
pub use songs::{add_song, delete_song};
