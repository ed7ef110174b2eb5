use crate::{
    errors::RepositoryError,
    model::subscription::{SubscriptionModel, SubscriptionSummary},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynSubscriptionQueryRepository = Arc<dyn SubscriptionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionQueryRepositoryTrait {
    async fn find_by_id(&self, id: Uuid) -> Result<SubscriptionModel, RepositoryError>;

    /// Sum of `price` over the user's rows for the service whose period
    /// overlaps `[start_date, end_date]`. Zero when nothing matches.
    async fn sum_by_filter(&self, filter: &SubscriptionSummary) -> Result<i64, RepositoryError>;
}
