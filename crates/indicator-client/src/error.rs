//! Indicator client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
