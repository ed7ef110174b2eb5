use crate::{
    abstract_trait::subscription::{
        repository::DynSubscriptionCommandRepository, service::SubscriptionCommandServiceTrait,
    },
    domain::responses::SubscriptionResponse,
    errors::ServiceError,
    model::subscription::SubscriptionModel,
    service::subscription::validate::validate_subscription,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct SubscriptionCommandService {
    command: DynSubscriptionCommandRepository,
    metrics: Metrics,
}

impl SubscriptionCommandService {
    pub fn new(command: DynSubscriptionCommandRepository, metrics: Metrics) -> Self {
        Self { command, metrics }
    }

    fn complete<T>(
        &self,
        method: Method,
        start: Instant,
        result: Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
        result
    }
}

#[async_trait]
impl SubscriptionCommandServiceTrait for SubscriptionCommandService {
    async fn create(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<SubscriptionResponse, ServiceError> {
        let start = Instant::now();

        info!(
            "📝 Creating subscription service={} user_id={}",
            subscription.service_name, subscription.user_id
        );

        if let Err(e) = validate_subscription(Some(subscription), Utc::now().date_naive()) {
            warn!("⚠️ Subscription rejected: {e}");
            return self.complete(Method::Create, start, Err(e));
        }

        let result = match self.command.create(subscription).await {
            Ok(created) => {
                info!("✅ Subscription created id={}", created.id);
                Ok(SubscriptionResponse::from(created))
            }
            Err(e) => {
                error!("❌ Failed to create subscription {}: {e}", subscription.id);
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(Method::Create, start, result)
    }

    async fn update(&self, subscription: &SubscriptionModel) -> Result<u64, ServiceError> {
        let start = Instant::now();

        info!(
            "🔄 Updating subscriptions of user_id={} service={}",
            subscription.user_id, subscription.service_name
        );

        if let Err(e) = validate_subscription(Some(subscription), Utc::now().date_naive()) {
            warn!("⚠️ Subscription update rejected: {e}");
            return self.complete(Method::Update, start, Err(e));
        }

        let result = match self.command.update_by_user(subscription).await {
            Ok(affected) => {
                info!(
                    "✅ Updated {affected} subscription(s) of user_id={}",
                    subscription.user_id
                );
                Ok(affected)
            }
            Err(e) => {
                error!(
                    "❌ Failed to update subscriptions of user {}: {e}",
                    subscription.user_id
                );
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(Method::Update, start, result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let start = Instant::now();

        if id.is_nil() {
            warn!("⚠️ Delete requested with nil id");
            return self.complete(Method::Delete, start, Err(ServiceError::EmptyId));
        }

        info!("🗑️ Deleting subscription id={id}");

        let result = self.command.delete(id).await.map_err(|e| {
            error!("❌ Failed to delete subscription {id}: {e}");
            ServiceError::Repo(e)
        });

        if result.is_ok() {
            info!("✅ Subscription deleted id={id}");
        }

        self.complete(Method::Delete, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::subscription::repository::SubscriptionQueryRepositoryTrait,
        errors::RepositoryError, repository::subscription::InMemorySubscriptionRepository,
    };
    use chrono::{Datelike, Months, NaiveDate};
    use std::sync::Arc;

    fn future_month(offset: u32) -> NaiveDate {
        let today = Utc::now().date_naive();
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
            .unwrap()
            .checked_add_months(Months::new(offset))
            .unwrap()
    }

    fn subscription(user_id: Uuid, service: &str, price: i32) -> SubscriptionModel {
        SubscriptionModel {
            id: Uuid::new_v4(),
            service_name: service.into(),
            price,
            user_id,
            start_date: future_month(1),
            end_date: Some(future_month(2)),
            created_at: None,
            updated_at: None,
        }
    }

    fn service() -> (SubscriptionCommandService, Arc<InMemorySubscriptionRepository>) {
        let repo = Arc::new(InMemorySubscriptionRepository::new());
        let service = SubscriptionCommandService::new(repo.clone(), Metrics::new());
        (service, repo)
    }

    #[tokio::test]
    async fn valid_subscription_reaches_the_store_once() {
        let (service, repo) = service();
        let sub = subscription(Uuid::new_v4(), "Netflix", 500);

        let created = service.create(&sub).await.unwrap();

        assert_eq!(created.id, sub.id);
        assert_eq!(repo.calls().create, 1);
        let stored = repo.snapshot();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].service_name, sub.service_name);
        assert_eq!(stored[0].start_date, sub.start_date);
        assert_eq!(service.metrics.count(Method::Create, Status::Success), 1);
    }

    #[tokio::test]
    async fn non_positive_price_never_reaches_the_store() {
        let (service, repo) = service();

        let err = service
            .create(&subscription(Uuid::new_v4(), "Netflix", 0))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidPrice));
        assert_eq!(repo.calls().total(), 0);
        assert_eq!(service.metrics.count(Method::Create, Status::Error), 1);
    }

    #[tokio::test]
    async fn past_start_is_rejected() {
        let (service, repo) = service();
        let sub = SubscriptionModel {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            ..subscription(Uuid::new_v4(), "Netflix", 500)
        };

        let err = service.create(&sub).await.unwrap_err();

        assert!(matches!(err, ServiceError::SubscriptionInPast));
        assert_eq!(repo.calls().create, 0);
    }

    #[tokio::test]
    async fn duplicate_triple_is_a_conflict() {
        let (service, _repo) = service();
        let user = Uuid::new_v4();
        let first = subscription(user, "Netflix", 500);
        service.create(&first).await.unwrap();

        let second = SubscriptionModel {
            id: Uuid::new_v4(),
            price: 700,
            ..first.clone()
        };
        let err = service.create(&second).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let (service, _repo) = service();
        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_nil_id_is_rejected_without_store_access() {
        let (service, repo) = service();
        let err = service.delete(Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyId));
        assert_eq!(repo.calls().delete, 0);
    }

    #[tokio::test]
    async fn deleted_subscription_can_no_longer_be_read() {
        let (service, repo) = service();
        let sub = subscription(Uuid::new_v4(), "Netflix", 500);
        service.create(&sub).await.unwrap();

        service.delete(sub.id).await.unwrap();

        let err = repo.find_by_id(sub.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn update_overwrites_every_subscription_of_the_user() {
        let (service, repo) = service();
        let user = Uuid::new_v4();
        let netflix = subscription(user, "Netflix", 500);
        let spotify = subscription(user, "Spotify", 200);
        let other_user = subscription(Uuid::new_v4(), "Netflix", 900);
        for sub in [&netflix, &spotify, &other_user] {
            service.create(sub).await.unwrap();
        }

        let change = SubscriptionModel {
            price: 650,
            ..netflix.clone()
        };
        let affected = service.update(&change).await.unwrap();

        assert_eq!(affected, 2);
        let spotify_after = repo.find_by_id(spotify.id).await.unwrap();
        assert_eq!(spotify_after.service_name, "Netflix");
        assert_eq!(spotify_after.price, 650);
        let untouched = repo.find_by_id(other_user.id).await.unwrap();
        assert_eq!(untouched.price, 900);
    }

    #[tokio::test]
    async fn update_runs_create_validation() {
        let (service, repo) = service();
        let err = service
            .update(&subscription(Uuid::nil(), "Netflix", 500))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::EmptyUser));
        assert_eq!(repo.calls().update_by_user, 0);
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let (service, repo) = service();
        repo.set_unavailable(true);
        let err = service
            .create(&subscription(Uuid::new_v4(), "Netflix", 500))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Repo(RepositoryError::Custom(_))));
        assert!(!err.is_client_error());
    }
}
