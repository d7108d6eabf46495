use sqlx::SqlitePool;
use uinfo_config::ApiConfig;

/// Shared state cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub api: ApiConfig,
}
