//! Conversions between stock-service wire types and chart models.

use stockservice_api::types::{BarRecord, TickUpdate};
use tickchart_core::{PriceBar, PriceBarPatch};

/// Convert a historical row to a chart PriceBar.
pub fn record_to_bar(record: &BarRecord) -> PriceBar {
    PriceBar {
        period_start: record.start_date.clone(),
        period_end: record.end_date.clone(),
        open: record.open,
        high: record.high,
        low: record.low,
        close: record.close,
        volume: record.volume,
        change_rate: record.rate,
        change_amount: record.rate_price,
        symbol: record.symbol.clone(),
    }
}

/// Convert a live tick to a bar patch.
///
/// The feed labels the period under its native `date` key; the patch
/// carries it as `period_end` so the merge lines up with the series
/// ordering field.
pub fn update_to_patch(update: TickUpdate) -> PriceBarPatch {
    PriceBarPatch {
        period_start: update.start_date,
        period_end: update.date,
        open: update.open,
        high: update.high,
        low: update.low,
        close: update.close,
        volume: update.volume,
        change_rate: update.rate,
        change_amount: update.rate_price,
        symbol: update.symbol,
    }
}
