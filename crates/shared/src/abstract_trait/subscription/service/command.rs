use crate::{
    domain::responses::SubscriptionResponse, errors::ServiceError,
    model::subscription::SubscriptionModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynSubscriptionCommandService = Arc<dyn SubscriptionCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionCommandServiceTrait {
    async fn create(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<SubscriptionResponse, ServiceError>;
    async fn update(&self, subscription: &SubscriptionModel) -> Result<u64, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}
