//! Indicator service HTTP client.

use crate::error::IndicatorError;
use crate::types::Indicator;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Client for the remote indicator service.
#[derive(Clone)]
pub struct IndicatorClient {
    client: Client,
    base_url: String,
}

impl IndicatorClient {
    /// Create a new indicator client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, IndicatorError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check if the indicator service is reachable.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/indicators?symbol=BTC/USDT&interval=1d", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Fetch indicator values for a symbol over an interval.
    #[instrument(skip(self))]
    pub async fn get_indicator(
        &self,
        symbol: &str,
        interval: &str,
    ) -> Result<Indicator, IndicatorError> {
        let response = self
            .client
            .get(format!(
                "{}/indicators?symbol={}&interval={}",
                self.base_url,
                encode(symbol),
                encode(interval),
            ))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Indicator fetch failed: {} - {}", status, message);
            return Err(IndicatorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let indicator: Indicator = serde_json::from_str(&body)?;

        debug!("Indicator for {} {}: rsi={}", symbol, interval, indicator.rsi);
        Ok(indicator)
    }
}
