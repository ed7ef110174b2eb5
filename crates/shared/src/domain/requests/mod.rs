pub mod subscription;

pub use self::subscription::{SubscriptionRequest, SubscriptionSummaryRequest};
