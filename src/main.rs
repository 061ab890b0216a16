//! chordbook - minimal song catalog web UI
//!
//! Browsing is open; add and delete require the shared secret. One SQLite
//! file, one table, no accounts and no background work.

use anyhow::Result;
use chordbook::config::{self, AppConfig, Cli};
use chordbook::{build_router, db, AppState};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting chordbook v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();

    // Secrets come from the environment only; the resolved value is a hash,
    // and neither it nor any plaintext is ever logged.
    let (password_hash, used_fallback) = config::resolve_password_hash(
        std::env::var(config::PASSWORD_HASH_ENV).ok(),
        std::env::var(config::PASSWORD_ENV).ok(),
    );
    if used_fallback {
        warn!(
            "Using built-in development password hash; set {} for real deployments",
            config::PASSWORD_HASH_ENV
        );
    }

    let version = config::load_version(&cli.version_file);
    info!("Catalog version: {}", version);

    let pool = db::init_database(&cli.database).await?;
    info!("✓ Database ready: {}", cli.database.display());

    let state = AppState::new(pool, AppConfig { password_hash, version });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    info!("chordbook listening on http://{}", cli.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
