//! Indicator bot - Entry point.

use anyhow::{Context, Result};
use indicator_bot::api::{create_router, AppState};
use indicator_bot::Config;
use indicator_client::IndicatorClient;
use std::net::SocketAddr;
use std::sync::Arc;
use telegram_client::TelegramClient;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    info!("Starting indicator bot...");

    // Initialize clients
    let indicator = IndicatorClient::new(&config.indicator.base_url, config.indicator.timeout)
        .context("Failed to create indicator client")?;

    let telegram = TelegramClient::new(
        &config.telegram.api_url,
        &config.telegram.bot_token,
        config.telegram.timeout,
    )
    .context("Failed to create Telegram client")?;

    if indicator.health_check().await {
        info!("Indicator service healthy at {}", config.indicator.base_url);
    } else {
        warn!("Indicator service health check failed - will retry on requests");
    }

    let chat_id_override = config.chat_id_override()?;
    if let Some(chat_id) = chat_id_override {
        info!("Replies pinned to chat {}", chat_id);
    }

    let commands = config.commands();
    info!("Supported commands: {:?}", commands);

    let state = Arc::new(AppState {
        indicator,
        telegram,
        commands,
        chat_id_override,
    });

    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
