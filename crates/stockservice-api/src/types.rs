//! Wire types for the stock-service API.

use serde::{Deserialize, Serialize};

/// One historical OHLCV row from the `historicalFilter` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BarRecord {
    /// Period start date label.
    pub start_date: String,
    /// Period end date label.
    pub end_date: String,
    /// Opening price.
    pub open: f64,
    /// Lowest price in the period.
    pub low: f64,
    /// Highest price in the period.
    pub high: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
    /// Change rate versus the prior period.
    pub rate: f64,
    /// Change amount versus the prior period.
    pub rate_price: f64,
    /// Symbol this row belongs to.
    pub symbol: String,
}

impl Default for BarRecord {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            open: 0.0,
            low: 0.0,
            high: 0.0,
            close: 0.0,
            volume: 0.0,
            rate: 0.0,
            rate_price: 0.0,
            symbol: String::new(),
        }
    }
}

/// One incremental update from the SSE tick stream.
///
/// Every field is optional: the feed sends only what changed. The
/// period label arrives under the feed's native `date` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TickUpdate {
    /// Period label for the in-progress bar.
    pub date: Option<String>,
    /// Period start date label.
    pub start_date: Option<String>,
    /// Opening price.
    pub open: Option<f64>,
    /// Lowest price so far.
    pub low: Option<f64>,
    /// Highest price so far.
    pub high: Option<f64>,
    /// Latest price.
    pub close: Option<f64>,
    /// Accumulated volume.
    pub volume: Option<f64>,
    /// Change rate.
    pub rate: Option<f64>,
    /// Change amount.
    pub rate_price: Option<f64>,
    /// Symbol the tick belongs to.
    pub symbol: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_record_full_row() {
        let json = r#"{
            "start_date": "2024-04-22",
            "end_date": "2024-04-26",
            "open": 100.0,
            "low": 95.5,
            "high": 108.25,
            "close": 104.0,
            "volume": 1250000.0,
            "rate": 4.0,
            "rate_price": 4.0,
            "symbol": "AAA"
        }"#;
        let record: BarRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.end_date, "2024-04-26");
        assert_eq!(record.high, 108.25);
        assert_eq!(record.symbol, "AAA");
    }

    #[test]
    fn test_bar_record_missing_fields_default() {
        let record: BarRecord = serde_json::from_str(r#"{"symbol": "BBB"}"#).unwrap();
        assert_eq!(record.symbol, "BBB");
        assert_eq!(record.open, 0.0);
        assert!(record.end_date.is_empty());
    }

    #[test]
    fn test_tick_update_partial() {
        let json = r#"{"date": "2024-05-02", "close": 105.0}"#;
        let tick: TickUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(tick.date.as_deref(), Some("2024-05-02"));
        assert_eq!(tick.close, Some(105.0));
        assert!(tick.open.is_none());
        assert!(tick.volume.is_none());
    }
}
