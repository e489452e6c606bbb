use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("unexpected error has occurred")]
    InternalServerError,

    #[error("{0}")]
    InternalServerErrorWithContext(String),

    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

/// Mongo写冲突错误码(违反唯一索引)
const MONGO_DUPLICATE_KEY: i32 = 11000;

/// 从Mongo错误中提取唯一索引冲突信息，非冲突错误返回None
pub fn duplicate_key_message(err: &mongodb::error::Error) -> Option<&str> {
    match err.kind.as_ref() {
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(we))
            if we.code == MONGO_DUPLICATE_KEY =>
        {
            Some(we.message.as_str())
        }
        mongodb::error::ErrorKind::BulkWrite(failure) => failure
            .write_errors
            .as_ref()
            .and_then(|errs| errs.iter().find(|we| we.code == MONGO_DUPLICATE_KEY))
            .map(|we| we.message.as_str()),
        _ => None,
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        if let Some(message) = duplicate_key_message(&err) {
            return AppError::Conflict(message.to_string());
        }

        error!("🔴 mongodb error: {:?}", err);
        AppError::InternalServerErrorWithContext(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::ValidationError(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
            // 存储/内部错误对客户端只暴露通用消息
            err => {
                error!("🔴 internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error."),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
