pub mod command;
pub mod query;

pub use self::command::{DynSubscriptionCommandRepository, SubscriptionCommandRepositoryTrait};
pub use self::query::{DynSubscriptionQueryRepository, SubscriptionQueryRepositoryTrait};
