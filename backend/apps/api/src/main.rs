//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `multiplication::MultiplicationError` rendered through `kernel::AppError`.

mod config;

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header},
};
use config::ServerConfig;
use multiplication::{
    InMemoryMultiplicationRepository, MultiplicationConfig, PgMultiplicationRepository,
    RandomFactorGenerator, multiplication_router, multiplication_router_generic,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,multiplication=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let multiplication_config =
        MultiplicationConfig::default().with_factor_range(config.factor_range);

    tracing::info!(
        factor_min = config.factor_range.min(),
        factor_max = config.factor_range.max(),
        "Factor range configured"
    );

    let multiplication_routes = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            tracing::info!("Migrations completed");

            multiplication_router(PgMultiplicationRepository::new(pool), multiplication_config)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, attempts are kept in memory only");

            let generator = RandomFactorGenerator::new(multiplication_config.factor_range);
            multiplication_router_generic(
                InMemoryMultiplicationRepository::new(),
                generator,
                multiplication_config,
            )
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let app = Router::new()
        .merge(multiplication_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
