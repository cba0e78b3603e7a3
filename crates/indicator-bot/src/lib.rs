//! Telegram webhook bot that relays financial indicator requests.
//!
//! One inbound update flows through: command parse → indicator fetch →
//! reply via the Telegram `sendMessage` endpoint. No state survives a
//! request.

pub mod api;
pub mod config;
pub mod error;
pub mod request;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use request::{parse_indicator_request, IndicatorRequest, ParseError};
