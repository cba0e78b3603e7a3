//! HTTP client for the remote indicator service.

mod client;
mod error;
mod types;

pub use client::IndicatorClient;
pub use error::IndicatorError;
pub use types::Indicator;
