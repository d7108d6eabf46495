use uinfo_config::Config;
use uinfo_server::{AppState, build_router, logger};

use std::error::Error;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = match config.logging.file {
        Some(ref name) => {
            let dir = Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&dir)?;
            Some(dir.join(name))
        }
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    config.log_summary();

    let connect_options = SqliteConnectOptions::new()
        .filename(config.database_path()?)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(connect_options)
        .await?;

    sqlx::migrate!("../crates/uinfo-db/migrations")
        .run(&pool)
        .await?;
    log::info!("Database migrations applied");

    let app = build_router(AppState {
        pool,
        api: config.api.clone(),
    });

    let listener = TcpListener::bind(config.bind_addr()).await?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install shutdown signal handler: {}", e);
        return;
    }
    log::info!("Shutdown signal received");
}
