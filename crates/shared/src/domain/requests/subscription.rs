use crate::{
    errors::{ConversionError, format_validation_errors},
    model::subscription::{SubscriptionModel, SubscriptionSummary},
    utils::MonthYear,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /subscriptions` and `PUT /subscriptions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubscriptionRequest {
    #[serde(default)]
    pub id: Uuid,

    #[validate(length(min = 1, message = "service_name is required"))]
    #[schema(example = "Netflix")]
    pub service_name: String,

    #[validate(range(min = 0, message = "price cannot be negative"))]
    #[schema(example = 500)]
    pub price: i32,

    pub user_id: Uuid,

    #[schema(value_type = String, example = "07-2025")]
    pub start_date: MonthYear,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "08-2025")]
    pub end_date: Option<MonthYear>,
}

/// Body of `POST /subscriptions/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubscriptionSummaryRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, message = "service_name is required"))]
    #[schema(example = "Netflix")]
    pub service_name: String,

    #[schema(value_type = String, example = "06-2025")]
    pub start_date: MonthYear,

    #[serde(default)]
    #[schema(value_type = String, example = "08-2025")]
    pub end_date: Option<MonthYear>,
}

impl SubscriptionRequest {
    /// Checks the wire shape and builds the domain value. A missing end
    /// period becomes the month after the start.
    pub fn into_model(self) -> Result<SubscriptionModel, ConversionError> {
        self.validate()
            .map_err(|e| ConversionError::Validation(format_validation_errors(&e)))?;

        let start_date = self.start_date.date();
        let end_date = match self.end_date {
            Some(end) => end.date(),
            None => self.start_date.next_month(),
        };

        Ok(SubscriptionModel {
            id: self.id,
            service_name: self.service_name,
            price: self.price,
            user_id: self.user_id,
            start_date,
            end_date: Some(end_date),
            created_at: None,
            updated_at: None,
        })
    }

    /// A `null` body deserializes to `None`.
    pub fn from_body(body: Option<Self>) -> Result<SubscriptionModel, ConversionError> {
        body.ok_or(ConversionError::EmptySubscription)?.into_model()
    }
}

impl SubscriptionSummaryRequest {
    pub fn into_summary(self) -> Result<SubscriptionSummary, ConversionError> {
        self.validate()
            .map_err(|e| ConversionError::Validation(format_validation_errors(&e)))?;

        let end_date = self.end_date.ok_or(ConversionError::DateRequired)?;

        Ok(SubscriptionSummary {
            user_id: self.user_id,
            service_name: self.service_name,
            start_date: self.start_date.date(),
            end_date: end_date.date(),
        })
    }
}
