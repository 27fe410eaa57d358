//! Price bar data structures and the per-symbol bar series.

use crate::interval::Interval;

/// One OHLCV observation for a period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBar {
    /// Period start date label.
    pub period_start: String,
    /// Period end date label. Series are ordered ascending by this field.
    pub period_end: String,
    /// Opening price.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Volume traded during the period.
    pub volume: f64,
    /// Change rate versus the prior period.
    pub change_rate: f64,
    /// Change amount versus the prior period.
    pub change_amount: f64,
    /// Symbol this bar belongs to.
    pub symbol: String,
}

impl PriceBar {
    /// Create the synthetic current-period placeholder bar.
    ///
    /// All numeric fields are zero and the symbol is empty until the
    /// first live update arrives; only the period label is set.
    pub fn placeholder(period_end: impl Into<String>) -> Self {
        Self {
            period_end: period_end.into(),
            ..Default::default()
        }
    }
}

/// A partial [`PriceBar`]: only the fields a live update carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBarPatch {
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub change_rate: Option<f64>,
    pub change_amount: Option<f64>,
    pub symbol: Option<String>,
}

impl PriceBarPatch {
    /// Shallow-merge the present fields into a bar.
    fn apply(&self, bar: &mut PriceBar) {
        if let Some(v) = &self.period_start {
            bar.period_start = v.clone();
        }
        if let Some(v) = &self.period_end {
            bar.period_end = v.clone();
        }
        if let Some(v) = self.open {
            bar.open = v;
        }
        if let Some(v) = self.high {
            bar.high = v;
        }
        if let Some(v) = self.low {
            bar.low = v;
        }
        if let Some(v) = self.close {
            bar.close = v;
        }
        if let Some(v) = self.volume {
            bar.volume = v;
        }
        if let Some(v) = self.change_rate {
            bar.change_rate = v;
        }
        if let Some(v) = self.change_amount {
            bar.change_amount = v;
        }
        if let Some(v) = &self.symbol {
            bar.symbol = v.clone();
        }
    }
}

/// Ordered bar collection for exactly one symbol/interval pair.
///
/// Once populated, every bar except the last is immutable; the last
/// element is the current-period placeholder and [`BarSeries::merge_tail`]
/// is the only way to change it. The whole series is replaced on a
/// symbol or interval change, never patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    symbol: String,
    interval: Interval,
    bars: Vec<PriceBar>,
}

impl BarSeries {
    /// Create an empty series for a symbol/interval pair.
    pub fn new(symbol: impl Into<String>, interval: Interval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            bars: Vec::new(),
        }
    }

    /// Append a bar during bootstrap.
    ///
    /// Bars arrive in response order (ascending by period end); the
    /// placeholder goes last.
    pub fn push(&mut self, bar: PriceBar) {
        self.bars.push(bar);
    }

    /// Merge a live update into the last bar.
    ///
    /// This is the sole mutator of an established series: prior bars
    /// are never touched. Returns `false` on an empty series (nothing
    /// to merge into).
    pub fn merge_tail(&mut self, patch: &PriceBarPatch) -> bool {
        match self.bars.last_mut() {
            Some(tail) => {
                patch.apply(tail);
                true
            }
            None => false,
        }
    }

    /// The symbol this series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The period length of each bar.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// The current-period bar, if the series is populated.
    pub fn tail(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Number of bars, placeholder included.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series holds no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(end: &str, close: f64) -> PriceBar {
        PriceBar {
            period_end: end.to_string(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: 100.0,
            symbol: "AAA".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_placeholder_is_zeroed() {
        let p = PriceBar::placeholder("2024-05-02");
        assert_eq!(p.period_end, "2024-05-02");
        assert_eq!(p.open, 0.0);
        assert_eq!(p.close, 0.0);
        assert_eq!(p.volume, 0.0);
        assert!(p.symbol.is_empty());
        assert!(p.period_start.is_empty());
    }

    #[test]
    fn test_merge_tail_touches_only_last_bar() {
        let mut series = BarSeries::new("AAA", Interval::Week1);
        series.push(bar("2024-04-26", 104.0));
        series.push(PriceBar::placeholder("2024-05-02"));
        let frozen = series.bars()[0].clone();

        let patch = PriceBarPatch {
            period_end: Some("2024-05-02".to_string()),
            close: Some(105.0),
            ..Default::default()
        };
        assert!(series.merge_tail(&patch));

        assert_eq!(series.bars()[0], frozen);
        let tail = series.tail().unwrap();
        assert_eq!(tail.close, 105.0);
        assert_eq!(tail.period_end, "2024-05-02");
    }

    #[test]
    fn test_merge_leaves_absent_fields_untouched() {
        let mut series = BarSeries::new("AAA", Interval::Week1);
        series.push(PriceBar::placeholder("2024-05-02"));

        let patch = PriceBarPatch {
            close: Some(105.0),
            ..Default::default()
        };
        series.merge_tail(&patch);

        let tail = series.tail().unwrap();
        assert_eq!(tail.close, 105.0);
        assert_eq!(tail.open, 0.0);
        assert_eq!(tail.volume, 0.0);
        assert!(tail.symbol.is_empty());
    }

    #[test]
    fn test_merge_tail_on_empty_series_is_noop() {
        let mut series = BarSeries::new("AAA", Interval::Week1);
        let patch = PriceBarPatch {
            close: Some(105.0),
            ..Default::default()
        };
        assert!(!series.merge_tail(&patch));
        assert!(series.is_empty());
    }

    #[test]
    fn test_successive_merges_accumulate() {
        let mut series = BarSeries::new("AAA", Interval::Week1);
        series.push(PriceBar::placeholder("2024-05-02"));

        series.merge_tail(&PriceBarPatch {
            open: Some(100.0),
            close: Some(101.0),
            ..Default::default()
        });
        series.merge_tail(&PriceBarPatch {
            close: Some(102.5),
            volume: Some(5000.0),
            ..Default::default()
        });

        let tail = series.tail().unwrap();
        assert_eq!(tail.open, 100.0);
        assert_eq!(tail.close, 102.5);
        assert_eq!(tail.volume, 5000.0);
    }
}
