//! Webhook HTTP API.

mod handlers;

pub use handlers::{create_router, AppState};
