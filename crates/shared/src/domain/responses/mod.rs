mod api;
mod subscription;

pub use self::api::{ApiResponse, TotalCostResponse};
pub use self::subscription::SubscriptionResponse;
