//! Historical data bootstrap for a symbol/interval pair.

use stockservice_api::{Result, StockClient, StockDetailsApi};
use tickchart_core::{BarSeries, Interval, PriceBar};

use crate::stockservice::record_to_bar;

/// Loads the bootstrap snapshot that seeds a chart view.
pub struct HistoricalLoader {
    api: StockDetailsApi,
}

impl HistoricalLoader {
    /// Create a new loader using the given client.
    pub fn new(client: StockClient) -> Self {
        Self {
            api: StockDetailsApi::new(client),
        }
    }

    /// Fetch the historical series and append the current-period placeholder.
    ///
    /// The returned series is ready to receive live merges: the last
    /// element is the zeroed placeholder labeled with today's date.
    /// On a transport or decode failure the error propagates and no
    /// series exists; the caller decides how to surface it. No retry.
    pub async fn load(&self, symbol: &str, interval: Interval) -> Result<BarSeries> {
        let records = self
            .api
            .historical_filter(symbol, interval.as_str())
            .await?;

        let mut series = BarSeries::new(symbol, interval);
        for record in &records {
            series.push(record_to_bar(record));
        }
        series.push(PriceBar::placeholder(today_label()));

        log::info!(
            "Loaded {} historical bars for {symbol} ({interval})",
            records.len()
        );

        Ok(series)
    }
}

/// Today's local date formatted as the chart's period label.
pub fn today_label() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_label_shape() {
        let label = today_label();
        // YYYY-MM-DD
        assert_eq!(label.len(), 10);
        assert_eq!(label.as_bytes()[4], b'-');
        assert_eq!(label.as_bytes()[7], b'-');
        assert!(label[..4].chars().all(|c| c.is_ascii_digit()));
    }
}
