//! Simple moving average over closing prices.

use tickchart_core::ChartSeries;

use crate::indicator::{Indicator, IndicatorSeries, MaPoint};

/// Moving-average indicator for one window size.
///
/// The output intentionally excludes the final chart entry (the
/// current-period bar) and averages `window - 1` closes, not `window`:
/// the series already carries one synthetic trailing bar, and the
/// rendered numbers must match the service's chart exactly. Changing
/// either bound changes every overlay value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    window: usize,
}

impl MovingAverage {
    /// Create a moving average with the given window size.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// The window size.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Indicator for MovingAverage {
    fn calculate(&self, chart: &ChartSeries) -> IndicatorSeries {
        // One output per entry except the trailing current-period bar.
        let len = chart.len().saturating_sub(1);
        let mut points = Vec::with_capacity(len);

        for i in 0..len {
            // A window below 2 has no closes to average.
            if i < self.window || self.window < 2 {
                points.push(MaPoint::Unavailable);
                continue;
            }

            let mut sum = 0.0;
            for j in 0..self.window - 1 {
                sum += chart.close_at(i - j);
            }
            let mean = sum / (self.window - 1) as f64;
            points.push(MaPoint::Value(format!("{mean:.3}")));
        }

        IndicatorSeries::new(self.window, points)
    }

    fn min_periods(&self) -> usize {
        self.window
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn label(&self) -> String {
        format!("MA{}", self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickchart_core::{BarSeries, Interval, PriceBar};

    fn chart_from_closes(closes: &[f64]) -> ChartSeries {
        let mut series = BarSeries::new("AAA", Interval::Week1);
        for (i, &close) in closes.iter().enumerate() {
            series.push(PriceBar {
                period_end: format!("2024-01-{:02}", i + 1),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 100.0,
                ..Default::default()
            });
        }
        ChartSeries::project(&series)
    }

    #[test]
    fn test_output_excludes_final_entry() {
        let chart = chart_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let ma = MovingAverage::new(5).calculate(&chart);
        assert_eq!(ma.len(), 9);
    }

    #[test]
    fn test_sentinel_below_window() {
        let chart = chart_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let ma = MovingAverage::new(5).calculate(&chart);

        for i in 0..5 {
            assert_eq!(ma.get(i), Some(&MaPoint::Unavailable), "index {i}");
        }
        assert!(ma.get(5).unwrap().is_available());
    }

    #[test]
    fn test_mean_over_window_minus_one_closes() {
        // Closes 1..=10; at i=5 the window covers closes 6,5,4,3.
        let chart = chart_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let ma = MovingAverage::new(5).calculate(&chart);

        assert_eq!(ma.get(5), Some(&MaPoint::Value("4.500".to_string())));
        // i=8 covers closes 9,8,7,6 → 7.5
        assert_eq!(ma.get(8), Some(&MaPoint::Value("7.500".to_string())));
    }

    #[test]
    fn test_three_decimal_formatting() {
        // Closes chosen so the mean does not land on a round value:
        // at i=3, window 3 averages closes 10.0 and 10.5 → 10.25.
        let chart = chart_from_closes(&[1.0, 2.0, 3.0, 10.5, 10.0, 11.0]);
        let ma = MovingAverage::new(3).calculate(&chart);

        assert_eq!(ma.get(4), Some(&MaPoint::Value("10.250".to_string())));
    }

    #[test]
    fn test_bootstrap_with_placeholder_all_sentinel() {
        // One real bar plus the zeroed placeholder: window 5 can never fill.
        let mut series = BarSeries::new("AAA", Interval::Week1);
        series.push(PriceBar {
            period_end: "2024-04-26".to_string(),
            close: 100.0,
            ..Default::default()
        });
        series.push(PriceBar::placeholder("2024-05-02"));
        let chart = ChartSeries::project(&series);

        let ma = MovingAverage::new(5).calculate(&chart);
        assert_eq!(ma.len(), 1);
        assert_eq!(ma.get(0), Some(&MaPoint::Unavailable));
    }

    #[test]
    fn test_each_window_is_independent() {
        let chart = chart_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);

        let ma5 = MovingAverage::new(5).calculate(&chart);
        let ma10 = MovingAverage::new(10).calculate(&chart);

        assert_eq!(ma5.window(), 5);
        assert_eq!(ma10.window(), 10);
        // Window 10 never fills on 10 entries (output length 9).
        assert!(ma10.points().iter().all(|p| !p.is_available()));
        assert!(ma5.points().iter().any(|p| p.is_available()));
    }

    #[test]
    fn test_sentinel_renders_as_dash() {
        assert_eq!(MaPoint::Unavailable.as_str(), "-");
        assert_eq!(MaPoint::Unavailable.to_string(), "-");
    }

    #[test]
    fn test_empty_chart_yields_empty_series() {
        let chart = ChartSeries::default();
        let ma = MovingAverage::new(5).calculate(&chart);
        assert!(ma.is_empty());
    }

    #[test]
    fn test_label() {
        assert_eq!(MovingAverage::new(20).label(), "MA20");
        assert!(MovingAverage::new(5).is_overlay());
        assert_eq!(MovingAverage::new(5).min_periods(), 5);
    }
}
