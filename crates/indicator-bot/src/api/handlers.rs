//! HTTP request handlers.

use crate::error::{AppError, AppResult};
use crate::request::parse_indicator_request;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use indicator_client::IndicatorClient;
use serde::Serialize;
use std::sync::Arc;
use telegram_client::{TelegramClient, Update};
use tracing::{info, warn};

/// Shared application state for handlers.
pub struct AppState {
    pub indicator: IndicatorClient,
    pub telegram: TelegramClient,
    /// Supported command words (lowercase).
    pub commands: Vec<String>,
    /// Replies go here instead of the inbound chat when set.
    pub chat_id_override: Option<i64>,
}

/// Create the webhook router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    indicator_api_healthy: bool,
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        indicator_api_healthy: state.indicator.health_check().await,
    })
}

/// Handle one Telegram webhook update.
///
/// Updates that are not bot commands are acknowledged with an empty 200 and
/// no outbound calls. Everything else runs the parse, fetch, reply sequence.
async fn webhook(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Update>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(update) = payload.map_err(|e| AppError::Decode(e.body_text()))?;

    let Some(message) = update.message else {
        return Ok(StatusCode::OK);
    };

    let (Some(text), Some(entity)) = (message.text.as_deref(), message.command_entity()) else {
        return Ok(StatusCode::OK);
    };

    let request = parse_indicator_request(text, entity, &state.commands).map_err(|e| {
        warn!(update_id = update.update_id, "Rejected command {:?}: {}", text, e);
        e
    })?;

    info!(
        update_id = update.update_id,
        "Command {} for {} over {}", request.indicator, request.symbol, request.interval
    );

    let indicator = state
        .indicator
        .get_indicator(&request.symbol, &request.interval)
        .await?;

    let chat_id = state.chat_id_override.unwrap_or(message.chat.id);
    let sent = state
        .telegram
        .send_message(chat_id, &request.reply_text(indicator.rsi))
        .await?;

    info!("Replied to chat {} with message {}", chat_id, sent.message_id);

    Ok(StatusCode::OK)
}
