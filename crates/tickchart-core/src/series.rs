//! Render-ready projection of a bar series.

use crate::bar::BarSeries;

/// One volume bar: its series index, size, and candle direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumePoint {
    /// Index into the chart series.
    pub index: usize,
    /// Traded volume.
    pub volume: f64,
    /// `1` for a falling candle (open > close), `-1` otherwise.
    pub direction: i8,
}

/// Chart-ready coordinate arrays derived from a [`BarSeries`].
///
/// Recomputed from scratch on every series mutation; never mutated in
/// place. All three arrays share the bar index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    /// Category axis labels (period end dates).
    pub labels: Vec<String>,
    /// Candle tuples in `[open, close, low, high]` order.
    pub ohlc: Vec<[f64; 4]>,
    /// Volume bars with direction markers.
    pub volume: Vec<VolumePoint>,
}

impl ChartSeries {
    /// Project a bar series into chart coordinates.
    ///
    /// Pure and single-pass: bar `i` contributes `labels[i]`,
    /// `ohlc[i]`, and `volume[i]`.
    pub fn project(series: &BarSeries) -> Self {
        let bars = series.bars();
        let mut labels = Vec::with_capacity(bars.len());
        let mut ohlc = Vec::with_capacity(bars.len());
        let mut volume = Vec::with_capacity(bars.len());

        for (i, bar) in bars.iter().enumerate() {
            labels.push(bar.period_end.clone());
            ohlc.push([bar.open, bar.close, bar.low, bar.high]);
            volume.push(VolumePoint {
                index: i,
                volume: bar.volume,
                direction: if bar.open > bar.close { 1 } else { -1 },
            });
        }

        Self {
            labels,
            ohlc,
            volume,
        }
    }

    /// Closing price at index `i`.
    pub fn close_at(&self, i: usize) -> f64 {
        self.ohlc[i][1]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.ohlc.len()
    }

    /// Whether the series holds no entries.
    pub fn is_empty(&self) -> bool {
        self.ohlc.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::PriceBar;
    use crate::interval::Interval;

    fn series(bars: &[(&str, f64, f64, f64, f64, f64)]) -> BarSeries {
        let mut s = BarSeries::new("AAA", Interval::Week1);
        for &(end, open, close, low, high, volume) in bars {
            s.push(PriceBar {
                period_end: end.to_string(),
                open,
                close,
                low,
                high,
                volume,
                ..Default::default()
            });
        }
        s
    }

    #[test]
    fn test_projection_lengths_match_input() {
        let s = series(&[
            ("2024-04-19", 98.0, 100.0, 96.0, 101.5, 900.0),
            ("2024-04-26", 100.0, 104.0, 95.5, 108.25, 1250.0),
            ("2024-05-02", 0.0, 0.0, 0.0, 0.0, 0.0),
        ]);
        let chart = ChartSeries::project(&s);

        assert_eq!(chart.labels.len(), 3);
        assert_eq!(chart.ohlc.len(), 3);
        assert_eq!(chart.volume.len(), 3);
    }

    #[test]
    fn test_ohlc_tuple_order() {
        let s = series(&[("2024-04-26", 100.0, 104.0, 95.5, 108.25, 1250.0)]);
        let chart = ChartSeries::project(&s);

        // [open, close, low, high]
        assert_eq!(chart.ohlc[0], [100.0, 104.0, 95.5, 108.25]);
        assert_eq!(chart.close_at(0), 104.0);
        assert_eq!(chart.labels[0], "2024-04-26");
    }

    #[test]
    fn test_volume_direction_rule() {
        let s = series(&[
            ("a", 105.0, 100.0, 99.0, 106.0, 10.0), // open > close → 1
            ("b", 100.0, 105.0, 99.0, 106.0, 20.0), // open < close → -1
            ("c", 100.0, 100.0, 99.0, 106.0, 30.0), // equal → -1
        ]);
        let chart = ChartSeries::project(&s);

        let dirs: Vec<i8> = chart.volume.iter().map(|v| v.direction).collect();
        assert_eq!(dirs, vec![1, -1, -1]);
        for v in &chart.volume {
            assert!(v.direction == 1 || v.direction == -1);
        }
    }

    #[test]
    fn test_volume_carries_index() {
        let s = series(&[
            ("a", 1.0, 2.0, 0.5, 2.5, 10.0),
            ("b", 2.0, 3.0, 1.5, 3.5, 20.0),
        ]);
        let chart = ChartSeries::project(&s);

        assert_eq!(chart.volume[0].index, 0);
        assert_eq!(chart.volume[1].index, 1);
        assert_eq!(chart.volume[1].volume, 20.0);
    }

    #[test]
    fn test_empty_series_projects_empty() {
        let s = BarSeries::new("AAA", Interval::Week1);
        let chart = ChartSeries::project(&s);
        assert!(chart.is_empty());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let s = series(&[("a", 1.0, 2.0, 0.5, 2.5, 10.0)]);
        assert_eq!(ChartSeries::project(&s), ChartSeries::project(&s));
    }
}
