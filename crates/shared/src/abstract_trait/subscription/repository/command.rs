use crate::{errors::RepositoryError, model::subscription::SubscriptionModel};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynSubscriptionCommandRepository =
    Arc<dyn SubscriptionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SubscriptionCommandRepositoryTrait {
    /// Fails with `AlreadyExists` when the user already holds the same
    /// service starting in the same month.
    async fn create(
        &self,
        subscription: &SubscriptionModel,
    ) -> Result<SubscriptionModel, RepositoryError>;

    /// Overwrites name, price and period of every row owned by
    /// `subscription.user_id`. Returns the number of rows touched.
    async fn update_by_user(&self, subscription: &SubscriptionModel)
    -> Result<u64, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
