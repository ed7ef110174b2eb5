use crate::{errors::ServiceError, model::subscription::SubscriptionModel};
use chrono::{Datelike, NaiveDate};

/// Business rules a subscription must satisfy before it reaches the store.
///
/// Rules are checked in a fixed order and the first failure wins. The
/// start month may equal the current month but never precede it.
pub fn validate_subscription(
    subscription: Option<&SubscriptionModel>,
    today: NaiveDate,
) -> Result<(), ServiceError> {
    let subscription = subscription.ok_or(ServiceError::EmptySubscription)?;

    if subscription.service_name.is_empty() {
        return Err(ServiceError::EmptyServiceName);
    }

    if subscription.user_id.is_nil() {
        return Err(ServiceError::EmptyUser);
    }

    if subscription.price <= 0 {
        return Err(ServiceError::InvalidPrice);
    }

    let current_month = today.with_day(1).unwrap_or(today);
    if subscription.start_date < current_month {
        return Err(ServiceError::SubscriptionInPast);
    }

    Ok(())
}
