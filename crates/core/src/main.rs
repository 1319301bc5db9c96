use anyhow::Result;
use std::time::Duration;
use tracing::info;

use courtbook_core::config::Config;
use courtbook_core::jobs::{InvitationExpiryJob, JobScheduler, PoolMetricsJob};
use courtbook_core::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    logging::init_logging(&config.logging);

    info!("Starting Courtbook core v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database_config()).await?;

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;
    info!("Migrations completed");

    // Expose Prometheus metrics
    if config.metrics.enabled {
        let addr = config.metrics_addr()?;
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()?;
        info!("Metrics exporter listening on {}", addr);
    }

    // Start background jobs
    let mut scheduler = JobScheduler::new();
    scheduler.register(InvitationExpiryJob::new(
        pool.clone(),
        config.sweep.interval_minutes,
    ));
    scheduler.register(PoolMetricsJob::new(pool.clone()));
    scheduler.start();

    info!("Courtbook core running; press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    scheduler.shutdown();
    scheduler.wait_for_shutdown(Duration::from_secs(10)).await;

    Ok(())
}
