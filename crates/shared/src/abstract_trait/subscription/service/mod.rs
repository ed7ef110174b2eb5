pub mod command;
pub mod query;

pub use self::command::{DynSubscriptionCommandService, SubscriptionCommandServiceTrait};
pub use self::query::{DynSubscriptionQueryService, SubscriptionQueryServiceTrait};
