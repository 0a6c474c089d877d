use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use nailbook::config::AppConfig;
use nailbook::db;
use nailbook::handlers;
use nailbook::services::availability::AvailabilitySimulator;
use nailbook::services::clock::{DemoRng, SystemClock};
use nailbook::services::notifications::notifier::LogNotifier;
use nailbook::services::notifications::NotificationCenter;
use nailbook::services::payments::simulated::SimulatedGateway;
use nailbook::services::storage::SqliteStorage;
use nailbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    let storage = SqliteStorage::new(Arc::new(Mutex::new(conn)));

    match config.demo_seed {
        Some(seed) => tracing::info!(seed, "demo placeholders seeded"),
        None => tracing::info!("demo placeholders using os entropy"),
    }

    let state = Arc::new(AppState {
        storage: Box::new(storage),
        clock: Box::new(SystemClock),
        rng: DemoRng::new(config.demo_seed),
        availability: AvailabilitySimulator::default(),
        payments: Box::new(SimulatedGateway::new(Duration::from_millis(
            config.payment_delay_ms,
        ))),
        notifications: NotificationCenter::new(
            Box::new(LogNotifier),
            Duration::from_millis(config.notification_stagger_ms),
        ),
        drafts: Mutex::new(HashMap::new()),
        config: config.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = handlers::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(business = %config.business_name, "starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
