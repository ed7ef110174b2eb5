use crate::{
    abstract_trait::subscription::repository::SubscriptionQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::subscription::{SubscriptionModel, SubscriptionSummary},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct SubscriptionQueryRepository {
    db: ConnectionPool,
}

impl SubscriptionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubscriptionQueryRepositoryTrait for SubscriptionQueryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<SubscriptionModel, RepositoryError> {
        info!("🔍 Fetching subscription id={id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let subscription = sqlx::query_as::<_, SubscriptionModel>(
            r#"
            SELECT
                id,
                service_name,
                price,
                user_id,
                start_date,
                end_date,
                created_at,
                updated_at
            FROM subscriptions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to read subscription {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        subscription.ok_or_else(|| {
            info!("🔍 Subscription {id} not found");
            RepositoryError::NotFound
        })
    }

    async fn sum_by_filter(&self, filter: &SubscriptionSummary) -> Result<i64, RepositoryError> {
        info!(
            "🔍 Summing subscriptions user_id={} service={} from {} to {}",
            filter.user_id, filter.service_name, filter.start_date, filter.end_date
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(price), 0)::BIGINT AS total_cost
            FROM subscriptions
            WHERE user_id = $1
              AND service_name = $2
              AND start_date <= $4
              AND (end_date IS NULL OR end_date >= $3)
            "#,
        )
        .bind(filter.user_id)
        .bind(&filter.service_name)
        .bind(filter.start_date)
        .bind(filter.end_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to calculate total cost: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        info!("✅ Total cost {total} for user {}", filter.user_id);

        Ok(total)
    }
}
