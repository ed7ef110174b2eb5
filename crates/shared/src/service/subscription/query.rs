use crate::{
    abstract_trait::subscription::{
        repository::DynSubscriptionQueryRepository, service::SubscriptionQueryServiceTrait,
    },
    domain::responses::SubscriptionResponse,
    errors::ServiceError,
    model::subscription::SubscriptionSummary,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct SubscriptionQueryService {
    query: DynSubscriptionQueryRepository,
    metrics: Metrics,
}

impl SubscriptionQueryService {
    pub fn new(query: DynSubscriptionQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
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
impl SubscriptionQueryServiceTrait for SubscriptionQueryService {
    async fn find_by_id(&self, id: Uuid) -> Result<SubscriptionResponse, ServiceError> {
        let start = Instant::now();

        if id.is_nil() {
            warn!("⚠️ Lookup requested with nil id");
            return self.complete(Method::Get, start, Err(ServiceError::EmptyId));
        }

        info!("🔍 Finding subscription id={id}");

        let result = match self.query.find_by_id(id).await {
            Ok(subscription) => Ok(SubscriptionResponse::from(subscription)),
            Err(e) => {
                error!("❌ Failed to find subscription {id}: {e}");
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(Method::Get, start, result)
    }

    async fn total_cost(&self, summary: &SubscriptionSummary) -> Result<i64, ServiceError> {
        let start = Instant::now();

        if summary.end_date < summary.start_date {
            warn!(
                "⚠️ Invalid period {} .. {} for user_id={}",
                summary.start_date, summary.end_date, summary.user_id
            );
            return self.complete(Method::TotalCost, start, Err(ServiceError::InvalidPeriod));
        }

        info!(
            "📊 Calculating total cost user_id={} service={}",
            summary.user_id, summary.service_name
        );

        let result = match self.query.sum_by_filter(summary).await {
            Ok(total) => {
                info!("✅ Total cost for user_id={} is {total}", summary.user_id);
                Ok(total)
            }
            Err(e) => {
                error!(
                    "❌ Failed to calculate total cost for user {}: {e}",
                    summary.user_id
                );
                Err(ServiceError::Repo(e))
            }
        };

        self.complete(Method::TotalCost, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::subscription::repository::SubscriptionCommandRepositoryTrait,
        domain::requests::SubscriptionRequest, errors::RepositoryError,
        repository::subscription::InMemorySubscriptionRepository, utils::MonthYear,
    };
    use chrono::{Datelike, Months, NaiveDate, Utc};
    use std::sync::Arc;

    fn future_month(offset: u32) -> NaiveDate {
        let today = Utc::now().date_naive();
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
            .unwrap()
            .checked_add_months(Months::new(offset))
            .unwrap()
    }

    fn service() -> (SubscriptionQueryService, Arc<InMemorySubscriptionRepository>) {
        let repo = Arc::new(InMemorySubscriptionRepository::new());
        let service = SubscriptionQueryService::new(repo.clone(), Metrics::new());
        (service, repo)
    }

    #[tokio::test]
    async fn inverted_period_never_queries_the_store() {
        let (service, repo) = service();
        let summary = SubscriptionSummary {
            user_id: Uuid::new_v4(),
            service_name: "Netflix".into(),
            start_date: future_month(3),
            end_date: future_month(2),
        };

        let err = service.total_cost(&summary).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidPeriod));
        assert_eq!(repo.calls().sum_by_filter, 0);
        assert_eq!(service.metrics.count(Method::TotalCost, Status::Error), 1);
    }

    #[tokio::test]
    async fn netflix_without_end_costs_its_price_over_surrounding_window() {
        let (service, repo) = service();
        let user = Uuid::new_v4();
        let start = MonthYear::from(future_month(2));

        let request = SubscriptionRequest {
            id: Uuid::new_v4(),
            service_name: "Netflix".into(),
            price: 500,
            user_id: user,
            start_date: start,
            end_date: None,
        };
        let model = request.into_model().unwrap();
        assert_eq!(model.end_date, Some(future_month(3)));
        repo.create(&model).await.unwrap();

        let total = service
            .total_cost(&SubscriptionSummary {
                user_id: user,
                service_name: "Netflix".into(),
                start_date: future_month(1),
                end_date: future_month(3),
            })
            .await
            .unwrap();

        assert_eq!(total, 500);
    }

    #[tokio::test]
    async fn find_renders_month_year_dates() {
        let (service, repo) = service();
        let model = SubscriptionRequest {
            id: Uuid::new_v4(),
            service_name: "Spotify".into(),
            price: 199,
            user_id: Uuid::new_v4(),
            start_date: MonthYear::new(2031, 7).unwrap(),
            end_date: None,
        }
        .into_model()
        .unwrap();
        repo.create(&model).await.unwrap();

        let found = service.find_by_id(model.id).await.unwrap();

        assert_eq!(found.start_date, "07-2031");
        assert_eq!(found.end_date.as_deref(), Some("08-2031"));
        assert!(found.created_at.is_some());
    }

    #[tokio::test]
    async fn find_nil_id_is_rejected() {
        let (service, repo) = service();
        let err = service.find_by_id(Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyId));
        assert_eq!(repo.calls().find_by_id, 0);
    }

    #[tokio::test]
    async fn find_missing_id_is_not_found() {
        let (service, _repo) = service();
        let err = service.find_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }
}
