//! uSpotly - Application Entry Point
//!
//! This is the main entry point for the uSpotly server.

use std::net::SocketAddr;

use axum::{Router, middleware as axum_middleware};
use redis::Client as RedisClient;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uspotly::{
    config::CONFIG,
    db, handlers,
    middleware::rate_limit_middleware,
    opendata::OpenDataClient,
    scheduler::ReminderScheduler,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting uSpotly server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Initialize Redis connection
    tracing::info!("Connecting to Redis...");
    let redis_client = RedisClient::open(CONFIG.redis.url.as_str())?;
    let redis_conn = redis::aio::ConnectionManager::new(redis_client).await?;

    // Build the open-data client
    let opendata = OpenDataClient::new(&CONFIG.opendata)?;
    tracing::info!("Open-data dataset: {}", CONFIG.opendata.dataset_url);

    // Create application state
    let state = AppState::new(db_pool.clone(), redis_conn, opendata, CONFIG.clone());

    // Start the reminder dispatch scheduler
    let mut reminder_scheduler =
        ReminderScheduler::new(CONFIG.reminders.clone(), db_pool).await?;
    reminder_scheduler.setup_jobs().await?;
    reminder_scheduler.start().await?;

    // Build the router
    let app = Router::new()
        .nest("/api/v1", handlers::routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
