use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every success body carries its payload under `message`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: T) -> Self {
        Self { message }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalCostResponse {
    pub total_cost: i64,
}
