pub mod command;
pub mod memory;
pub mod query;

pub use self::command::SubscriptionCommandRepository;
pub use self::memory::InMemorySubscriptionRepository;
pub use self::query::SubscriptionQueryRepository;
