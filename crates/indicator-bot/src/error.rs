//! Application error types and their HTTP mapping.

use crate::request::ParseError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use indicator_client::IndicatorError;
use serde::Serialize;
use telegram_client::TelegramError;
use thiserror::Error;

/// Main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid update payload: {0}")]
    Decode(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Indicator service error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Telegram error: {0}")]
    Telegram(#[from] TelegramError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure surfaces to the webhook caller as a 400; nothing is
        // retried and nothing is fatal to the process.
        let code = match &self {
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::Parse(ParseError::UnsupportedIndicator(_)) => "UNSUPPORTED_INDICATOR",
            AppError::Parse(ParseError::MissingSymbol) => "MISSING_SYMBOL",
            AppError::Parse(ParseError::MalformedEntity { .. }) => "MALFORMED_ENTITY",
            AppError::Indicator(_) => "INDICATOR_API_ERROR",
            AppError::Telegram(_) => "TELEGRAM_API_ERROR",
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
