use crate::{
    abstract_trait::subscription::repository::SubscriptionCommandRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::subscription::SubscriptionModel,
};
use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct SubscriptionCommandRepository {
    db: ConnectionPool,
}

impl SubscriptionCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

pub(crate) fn duplicate_message(subscription: &SubscriptionModel) -> String {
    format!(
        "subscription already exists for user {} service {} at {}",
        subscription.user_id,
        subscription.service_name,
        subscription.start_date.format("%Y-%m-%d"),
    )
}

#[async_trait]
impl SubscriptionCommandRepositoryTrait for SubscriptionCommandRepository {
    async fn create(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<SubscriptionModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        // Serialises creates per user until commit, so the count below
        // cannot be raced by a concurrent insert.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1::text, 0))")
            .bind(subscription.user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to lock user {}: {e:?}", subscription.user_id);
                RepositoryError::from(e)
            })?;

        let existing: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM subscriptions
            WHERE user_id = $1 AND service_name = $2 AND start_date = $3
            "#,
        )
        .bind(subscription.user_id)
        .bind(&subscription.service_name)
        .bind(subscription.start_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to check uniqueness: {e:?}");
            RepositoryError::from(e)
        })?;

        if existing > 0 {
            warn!(
                "⚠️ Subscription already exists user_id={} service={} start_date={}",
                subscription.user_id, subscription.service_name, subscription.start_date
            );
            return Err(RepositoryError::AlreadyExists(duplicate_message(
                subscription,
            )));
        }

        let created = sqlx::query_as::<_, SubscriptionModel>(
            r#"
            INSERT INTO subscriptions (
                id,
                service_name,
                price,
                user_id,
                start_date,
                end_date,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING
                id,
                service_name,
                price,
                user_id,
                start_date,
                end_date,
                created_at,
                updated_at
            "#,
        )
        .bind(subscription.id)
        .bind(&subscription.service_name)
        .bind(subscription.price)
        .bind(subscription.user_id)
        .bind(subscription.start_date)
        .bind(subscription.end_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                warn!("⚠️ Subscription id {} already taken", subscription.id);
                RepositoryError::AlreadyExists(format!(
                    "subscription {} already exists",
                    subscription.id
                ))
            }
            _ => {
                error!("❌ Failed to create subscription: {e:?}");
                RepositoryError::Sqlx(e)
            }
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit subscription {}: {e:?}", subscription.id);
            RepositoryError::from(e)
        })?;

        info!("✅ Created subscription id={}", created.id);

        Ok(created)
    }

    async fn update_by_user(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            UPDATE subscriptions
            SET
                service_name = $1,
                price = $2,
                start_date = $3,
                end_date = $4,
                updated_at = NOW()
            WHERE user_id = $5
            "#,
        )
        .bind(&subscription.service_name)
        .bind(subscription.price)
        .bind(subscription.start_date)
        .bind(subscription.end_date)
        .bind(subscription.user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to update subscriptions of user {}: {e:?}",
                subscription.user_id
            );
            RepositoryError::Sqlx(e)
        })?;

        info!(
            "✅ Updated {} subscription(s) of user {}",
            result.rows_affected(),
            subscription.user_id
        );

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete subscription {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        if result.rows_affected() == 0 {
            warn!("⚠️ Subscription {id} not found for delete");
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted subscription id={id}");

        Ok(())
    }
}
