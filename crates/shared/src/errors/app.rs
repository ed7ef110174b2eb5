use crate::errors::{conversion::ConversionError, service::ServiceError};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Conversion(#[from] ConversionError),

    #[error("Unhandled: {0}")]
    Unhandled(String),
}

impl AppError {
    pub fn log(&self) {
        match self {
            AppError::Service(service_err) if service_err.is_client_error() => {
                warn!("⚠️ {}", self)
            }
            AppError::Service(_) => error!("🚨 {}", self),
            AppError::Conversion(_) => warn!("📝 {}", self),
            AppError::Unhandled(_) => error!("💥 {}", self),
        }
    }
}
