//! HTTP client for the stock-service API.

use reqwest::{Client, Response};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{ApiError, Error, Result};

/// HTTP client for making requests to the stock-service API.
#[derive(Debug, Clone)]
pub struct StockClient {
    config: Arc<Config>,
    http: Client,
}

impl StockClient {
    /// Create a new client with the given configuration.
    ///
    /// The underlying reqwest client carries no global timeout; the
    /// configured timeout is applied per REST request so long-lived
    /// streaming responses are not cut off.
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Create a client against the default local service.
    pub fn local() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(url: impl Into<String>) -> Result<Self> {
        Self::new(Config::new(url))
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Make a GET request and decode the JSON response.
    pub async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<HashMap<String, String>>,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let mut request = self.http.get(&url).timeout(self.config.timeout);

        if let Some(params) = params {
            request = request.query(&params);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Open a GET request for a server-sent-event stream.
    ///
    /// Returns the raw response for the caller to consume incrementally.
    /// No timeout is applied; the stream stays open until either side
    /// closes it.
    pub async fn get_stream(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(ApiError::new(
                status.as_u16() as i32,
                format!("HTTP {status}: {body}"),
            )));
        }

        Ok(response)
    }

    /// Handle an API response body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(Error::Api(ApiError::new(
                    error_response.code,
                    error_response.msg,
                )));
            }

            return Err(Error::Api(ApiError::new(
                status.as_u16() as i32,
                format!("HTTP {status}: {body}"),
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {}", body);
            Error::Json(e)
        })
    }
}

/// Error response body from the API.
#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    code: i32,
    #[serde(alias = "message")]
    msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_client() {
        let client = StockClient::local().unwrap();
        assert_eq!(client.config().base_url, crate::BASE_URL);
    }

    #[test]
    fn test_custom_base_url() {
        let client = StockClient::with_base_url("http://stocks.internal/api/v1").unwrap();
        assert_eq!(client.config().base_url, "http://stocks.internal/api/v1");
    }

    #[test]
    fn test_error_response_aliases_message() {
        let body = r#"{"code": 404, "message": "symbol not found"}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code, 404);
        assert_eq!(parsed.msg, "symbol not found");
    }
}
