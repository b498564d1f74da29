//! Exchange-rate lookup against an open.er-api.com style endpoint.

use crate::domain::ports::RateSource;
use crate::utils::error::{CalcError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Client for a rate service whose lookup path is keyed by the source
/// currency (`GET {base}/{FROM}`) and whose body carries a `rates` map of
/// currency code to rate.
pub struct OpenErApi {
    client: Client,
    base_url: String,
}

impl OpenErApi {
    /// The request timeout is mandatory; an unreachable rate service must
    /// surface as a network error instead of hanging the menu.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RateSource for OpenErApi {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64> {
        let from = from.to_ascii_uppercase();
        let to = to.to_ascii_uppercase();
        let url = format!("{}/{}", self.base_url, from);

        tracing::debug!(%url, "requesting exchange rates");
        let response = self.client.get(&url).send().await?;
        tracing::debug!(status = %response.status(), "rate service responded");

        // The service answers 4xx when the source currency itself is
        // unknown; anything else non-success is the service misbehaving.
        if response.status().is_client_error() {
            return Err(CalcError::UnknownCurrency { code: from });
        }
        let response = response.error_for_status()?;

        // A body without a parseable `rates` map is a malformed response,
        // not a connectivity failure.
        let body = response.text().await?;
        let payload: RatesResponse = serde_json::from_str(&body)?;
        payload
            .rates
            .get(&to)
            .copied()
            .ok_or(CalcError::UnknownCurrency { code: to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn api(server: &MockServer) -> OpenErApi {
        OpenErApi::new(server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_rate_extracts_destination_entry() {
        let server = MockServer::start();
        let rates_mock = server.mock(|when, then| {
            when.method(GET).path("/USD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"rates": {"EUR": 0.9, "GBP": 0.8}}));
        });

        let rate = api(&server).fetch_rate("USD", "EUR").await.unwrap();

        rates_mock.assert();
        assert_eq!(rate, 0.9);
    }

    #[tokio::test]
    async fn test_fetch_rate_uppercases_codes() {
        let server = MockServer::start();
        let rates_mock = server.mock(|when, then| {
            when.method(GET).path("/USD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"rates": {"EUR": 0.9}}));
        });

        let rate = api(&server).fetch_rate("usd", "eur").await.unwrap();

        rates_mock.assert();
        assert_eq!(rate, 0.9);
    }

    #[tokio::test]
    async fn test_missing_destination_code_is_a_lookup_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/USD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"rates": {"GBP": 0.8}}));
        });

        let err = api(&server).fetch_rate("USD", "EUR").await.unwrap_err();

        assert!(matches!(err, CalcError::UnknownCurrency { ref code } if code == "EUR"));
    }

    #[tokio::test]
    async fn test_client_error_status_is_a_lookup_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/XXX");
            then.status(404);
        });

        let err = api(&server).fetch_rate("xxx", "EUR").await.unwrap_err();

        assert!(matches!(err, CalcError::UnknownCurrency { ref code } if code == "XXX"));
    }

    #[tokio::test]
    async fn test_body_without_rates_map_is_a_serialization_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/USD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"result": "error"}));
        });

        let err = api(&server).fetch_rate("USD", "EUR").await.unwrap_err();

        assert!(matches!(err, CalcError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_server_error_status_is_a_network_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/USD");
            then.status(500);
        });

        let err = api(&server).fetch_rate("USD", "EUR").await.unwrap_err();

        assert!(matches!(err, CalcError::Network(_)));
    }

    #[tokio::test]
    async fn test_exceeded_timeout_is_a_network_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/USD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"rates": {"EUR": 0.9}}))
                .delay(Duration::from_millis(500));
        });

        let client = OpenErApi::new(server.base_url(), Duration::from_millis(50)).unwrap();
        let err = client.fetch_rate("USD", "EUR").await.unwrap_err();

        match err {
            CalcError::Network(e) => assert!(e.is_timeout()),
            other => panic!("expected a network error, got {:?}", other),
        }
    }
}
