//! Typed errors and HTTP mapping.

use crate::service::ValidationReport;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("unknown store backend: {0}")]
    UnknownBackend(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("duplicate widget id {0}")]
    DuplicateKey(Uuid),
    #[error("widget {0} does not exist")]
    Missing(Uuid),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether the failure is a connectivity or contention fault worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Unavailable(_) => true,
            StoreError::Db(e) => is_transient_sqlx(e),
            StoreError::DuplicateKey(_) | StoreError::Missing(_) => false,
        }
    }
}

fn is_transient_sqlx(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut => true,
        sqlx::Error::Database(db) => db
            .code()
            .map(|code| {
                code.starts_with("08")
                    || matches!(&*code, "40001" | "40P01" | "57P01" | "57P02" | "57P03")
            })
            .unwrap_or(false),
        _ => false,
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// 404. `Some` carries a message rendered as a JSON string; `None` is an empty body.
    #[error("not found")]
    NotFound(Option<String>),
    #[error("conflict")]
    Conflict,
    #[error("one or more validation errors occurred")]
    Validation(ValidationReport),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error(transparent)]
    Store(StoreError),
    /// Broken internal contract; reported as a generic server fault.
    #[error("internal: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey(_) => AppError::Conflict,
            StoreError::Missing(_) => AppError::NotFound(None),
            other => AppError::Store(other),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::from(e).into()
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

pub fn error_body(code: &str, message: String, details: Option<serde_json::Value>) -> ErrorBody {
    ErrorBody {
        error: ErrorDetail {
            code: code.to_string(),
            message,
            details,
        },
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(Some(message)) => (StatusCode::NOT_FOUND, Json(message)).into_response(),
            AppError::NotFound(None) => StatusCode::NOT_FOUND.into_response(),
            AppError::Conflict => StatusCode::CONFLICT.into_response(),
            AppError::Validation(report) => {
                let message = "one or more validation errors occurred".to_string();
                let details = serde_json::to_value(&report).ok();
                (
                    StatusCode::BAD_REQUEST,
                    Json(error_body("validation_error", message, details)),
                )
                    .into_response()
            }
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(error_body("bad_request", message, None))).into_response()
            }
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(error_body("payload_too_large", "request body is too large".into(), None)),
            )
                .into_response(),
            AppError::Internal(message) => {
                tracing::error!(%message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_body("internal_error", "an unexpected error occurred".into(), None)),
                )
                    .into_response()
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, "storage failure");
                let code = match e {
                    StoreError::Db(_) => "database_error",
                    _ => "internal_error",
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_body(code, "an unexpected error occurred".into(), None)),
                )
                    .into_response()
            }
        }
    }
}
