use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::subscription::repository::{
        DynSubscriptionCommandRepository, DynSubscriptionQueryRepository,
    },
    config::ConnectionPool,
    repository::subscription::{SubscriptionCommandRepository, SubscriptionQueryRepository},
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let command = Arc::new(SubscriptionCommandRepository::new(pool.clone()))
            as DynSubscriptionCommandRepository;
        let query =
            Arc::new(SubscriptionQueryRepository::new(pool)) as DynSubscriptionQueryRepository;

        Self::from_repositories(command, query)
    }

    /// Builds the services on top of any repository pair, e.g. the
    /// in-memory store used by tests.
    pub fn from_repositories(
        command: DynSubscriptionCommandRepository,
        query: DynSubscriptionQueryRepository,
    ) -> Self {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        Self {
            di_container: DependenciesInject::new(command, query, metrics),
            registry: Arc::new(registry),
        }
    }
}
