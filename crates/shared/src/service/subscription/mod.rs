mod command;
mod query;
mod validate;

pub use self::command::SubscriptionCommandService;
pub use self::query::SubscriptionQueryService;
pub use self::validate::validate_subscription;
