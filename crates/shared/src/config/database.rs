use crate::errors::RepositoryError;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{error, info};

pub type ConnectionPool = Pool<Postgres>;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

pub struct ConnectionManager;

impl ConnectionManager {
    /// Builds the pool, confirms the store answers within a short bounded
    /// wait and optionally applies the bundled migrations.
    pub async fn new_pool(
        connection_string: &str,
        max_connections: u32,
        run_migrations: bool,
    ) -> Result<ConnectionPool, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(PING_TIMEOUT)
            .connect_lazy(connection_string)
            .map_err(|e| {
                error!("❌ Invalid database connection string: {e:?}");
                RepositoryError::from(e)
            })?;

        Self::ping(&pool).await?;

        if run_migrations {
            info!("📦 Running database migrations");
            sqlx::migrate!("../../migrations")
                .run(&pool)
                .await
                .map_err(|e| {
                    error!("❌ Failed to run migrations: {e:?}");
                    RepositoryError::from(e)
                })?;
        }

        info!("✅ Database pool ready");

        Ok(pool)
    }

    async fn ping(pool: &ConnectionPool) -> Result<(), RepositoryError> {
        let ping = sqlx::query("SELECT 1").execute(pool);

        match tokio::time::timeout(PING_TIMEOUT, ping).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => {
                error!("❌ Database ping failed: {e:?}");
                Err(RepositoryError::from(e))
            }
            Err(_) => {
                error!("❌ Database ping timed out after {PING_TIMEOUT:?}");
                Err(RepositoryError::Custom(format!(
                    "database did not answer within {PING_TIMEOUT:?}"
                )))
            }
        }
    }
}
