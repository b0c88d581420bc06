/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - 認証 (401) / 認可 (403) の失敗を `{ success: false, message }` に統一する
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for every authentication failure whose cause must stay opaque.
pub const NOT_AUTHORIZED: &str = "Not authorized to access this route";

/// Message returned when a verified token names a principal that no longer exists.
pub const PRINCIPAL_NOT_FOUND: &str = "User not found";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
}

impl AppError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized(NOT_AUTHORIZED.to_string())
    }

    pub fn principal_not_found() -> Self {
        Self::Unauthorized(PRINCIPAL_NOT_FOUND.to_string())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
