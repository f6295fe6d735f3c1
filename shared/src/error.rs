use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    // リモートストアの失敗は操作ごとの固定メッセージで表面化させる
    #[error("{message}")]
    RemoteStoreError {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("{message}")]
    ExternalServiceError {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to run transaction.")]
    TransactionError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error(transparent)]
    ConversionEntityError(#[from] strum::ParseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            e @ (AppError::RemoteStoreError { .. }
            | AppError::ExternalServiceError { .. }
            | AppError::TransactionError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status_code, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
