use crate::{
    domain::responses::SubscriptionResponse, errors::ServiceError,
    model::subscription::SubscriptionSummary,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynSubscriptionQueryService = Arc<dyn SubscriptionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionQueryServiceTrait {
    async fn find_by_id(&self, id: Uuid) -> Result<SubscriptionResponse, ServiceError>;
    async fn total_cost(&self, summary: &SubscriptionSummary) -> Result<i64, ServiceError>;
}
