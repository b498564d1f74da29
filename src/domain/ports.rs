use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of exchange rates for a currency pair. The menu session is generic
/// over this so tests can drive it without a live endpoint.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64>;
}
