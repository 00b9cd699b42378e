use crudkit_core::{HealthIndicator, HealthStatus};
use sqlx::SqlitePool;

/// Reports `DOWN` when `SELECT 1` fails on the pool.
pub struct SqliteHealth {
    pool: SqlitePool,
}

impl SqliteHealth {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HealthIndicator for SqliteHealth {
    fn name(&self) -> &str {
        "db"
    }

    async fn check(&self) -> HealthStatus {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => HealthStatus::Up,
            Err(e) => HealthStatus::Down(e.to_string()),
        }
    }
}
