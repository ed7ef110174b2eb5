use shared::{
    abstract_trait::subscription::{
        repository::{DynSubscriptionCommandRepository, DynSubscriptionQueryRepository},
        service::{DynSubscriptionCommandService, DynSubscriptionQueryService},
    },
    service::subscription::{SubscriptionCommandService, SubscriptionQueryService},
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub subscription_command: DynSubscriptionCommandService,
    pub subscription_query: DynSubscriptionQueryService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("subscription_command", &"SubscriptionCommandService")
            .field("subscription_query", &"SubscriptionQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(
        command_repo: DynSubscriptionCommandRepository,
        query_repo: DynSubscriptionQueryRepository,
        metrics: Metrics,
    ) -> Self {
        let subscription_command =
            Arc::new(SubscriptionCommandService::new(command_repo, metrics.clone()))
                as DynSubscriptionCommandService;

        let subscription_query = Arc::new(SubscriptionQueryService::new(query_repo, metrics))
            as DynSubscriptionQueryService;

        Self {
            subscription_command,
            subscription_query,
        }
    }
}
