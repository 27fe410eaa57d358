//! Stock-details endpoints.

use std::collections::HashMap;

use crate::client::StockClient;
use crate::error::{Error, Result};
use crate::types::BarRecord;

/// Stock-details data API.
#[derive(Debug, Clone)]
pub struct StockDetailsApi {
    client: StockClient,
}

impl StockDetailsApi {
    /// Create a new stock-details API instance.
    pub fn new(client: StockClient) -> Self {
        Self { client }
    }

    /// Get the historical OHLCV series for a symbol and interval.
    ///
    /// # Arguments
    /// * `symbol` - Ticker symbol (e.g., "AAA")
    /// * `interval` - Period length as the wire string (e.g., "1w")
    ///
    /// # Example
    /// ```ignore
    /// let client = StockClient::local()?;
    /// let details = StockDetailsApi::new(client);
    /// let rows = details.historical_filter("AAA", "1w").await?;
    /// ```
    pub async fn historical_filter(
        &self,
        symbol: &str,
        interval: &str,
    ) -> Result<Vec<BarRecord>> {
        if symbol.is_empty() {
            return Err(Error::InvalidParameter("symbol must not be empty".into()));
        }

        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("interval".to_string(), interval.to_string());

        self.client
            .get("/stockDetails/historicalFilter", Some(params))
            .await
    }

    /// Get the underlying client.
    pub fn client(&self) -> &StockClient {
        &self.client
    }
}
