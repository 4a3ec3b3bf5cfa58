//! Example consumer: a separate Rust project that uses resource-db as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Or from this directory: `cargo run`

use axum::Router;
use resource_db::{common_routes, load_from_path, resource_routes, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resource_db=info")),
        )
        .init();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "resources.json".into());
    let mut config = load_from_path(&config_path).await?;
    if std::env::var_os(resource_db::config::DB_BACKEND_ENV).is_some() {
        config.db = resource_db::db_spec_from_env()?;
    }
    let state = AppState::from_config(&config)?;

    let app = Router::new()
        .merge(common_routes())
        .nest("/api/v1", resource_routes(state));

    let port: u16 = std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    tracing::info!("Example consumer listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
