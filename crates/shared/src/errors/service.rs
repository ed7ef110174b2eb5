use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repo(#[from] RepositoryError),

    #[error("subscription cannot be empty")]
    EmptySubscription,

    #[error("subscription name cannot be empty")]
    EmptyServiceName,

    #[error("user cannot be empty")]
    EmptyUser,

    #[error("price must be greater than zero")]
    InvalidPrice,

    #[error("subscription in past")]
    SubscriptionInPast,

    #[error("id cannot be empty")]
    EmptyId,

    #[error("invalid period")]
    InvalidPeriod,
}

impl ServiceError {
    pub fn is_client_error(&self) -> bool {
        match self {
            ServiceError::Repo(repo_err) => repo_err.is_client_error(),
            _ => true,
        }
    }
}
