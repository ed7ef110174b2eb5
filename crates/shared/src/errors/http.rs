use crate::errors::{
    app::AppError, conversion::ConversionError, error::ErrorResponse,
    repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppErrorHttp(pub AppError);

impl From<AppError> for AppErrorHttp {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(AppError::Service(err))
    }
}

impl From<ConversionError> for AppErrorHttp {
    fn from(err: ConversionError) -> Self {
        Self(AppError::Conversion(err))
    }
}

impl AppErrorHttp {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            AppError::Service(service_err) => match service_err {
                ServiceError::Repo(repo_err) => match repo_err {
                    RepositoryError::NotFound => StatusCode::NOT_FOUND,
                    RepositoryError::AlreadyExists(_) => StatusCode::CONFLICT,
                    RepositoryError::Sqlx(_)
                    | RepositoryError::Migrate(_)
                    | RepositoryError::Custom(_) => StatusCode::INTERNAL_SERVER_ERROR,
                },
                _ => StatusCode::BAD_REQUEST,
            },
            AppError::Conversion(_) => StatusCode::BAD_REQUEST,
            AppError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        self.0.log();

        let status = self.status_code();

        let message = match self.0 {
            AppError::Service(ServiceError::Repo(RepositoryError::Sqlx(_)))
            | AppError::Service(ServiceError::Repo(RepositoryError::Migrate(_))) => {
                "Database error".to_string()
            }
            AppError::Service(ServiceError::Repo(RepositoryError::NotFound)) => {
                "subscription not found".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (
                AppErrorHttp::from(ServiceError::InvalidPrice),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppErrorHttp::from(ConversionError::DateRequired),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppErrorHttp::from(ServiceError::Repo(RepositoryError::NotFound)),
                StatusCode::NOT_FOUND,
            ),
            (
                AppErrorHttp::from(ServiceError::Repo(RepositoryError::AlreadyExists(
                    "dup".into(),
                ))),
                StatusCode::CONFLICT,
            ),
            (
                AppErrorHttp::from(ServiceError::Repo(RepositoryError::Custom("boom".into()))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected, "{:?}", err);
        }
    }
}
