//! Core indicator trait and output types.

use tickchart_core::ChartSeries;

/// One indicator point, aligned by index to the chart series.
///
/// Points without enough history render as the `"-"` sentinel; computed
/// points carry the value pre-formatted as a decimal string, which is
/// what the chart renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaPoint {
    /// Not enough history to compute a value here.
    Unavailable,
    /// Computed value as a decimal string.
    Value(String),
}

impl MaPoint {
    /// The rendered form of this point.
    pub fn as_str(&self) -> &str {
        match self {
            MaPoint::Unavailable => "-",
            MaPoint::Value(v) => v,
        }
    }

    /// Whether this point carries a computed value.
    pub fn is_available(&self) -> bool {
        matches!(self, MaPoint::Value(_))
    }
}

impl std::fmt::Display for MaPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one indicator run over a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    window: usize,
    points: Vec<MaPoint>,
}

impl IndicatorSeries {
    /// Create a series for the given window size.
    pub fn new(window: usize, points: Vec<MaPoint>) -> Self {
        Self { window, points }
    }

    /// The window size this series was computed with.
    pub fn window(&self) -> usize {
        self.window
    }

    /// The points, aligned to chart indices.
    pub fn points(&self) -> &[MaPoint] {
        &self.points
    }

    /// Point at chart index `i`, if within range.
    pub fn get(&self, i: usize) -> Option<&MaPoint> {
        self.points.get(i)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Trait for chart indicators.
pub trait Indicator {
    /// Calculate the indicator values for the given chart series.
    fn calculate(&self, chart: &ChartSeries) -> IndicatorSeries;

    /// Minimum number of entries before the indicator produces values.
    fn min_periods(&self) -> usize;

    /// Whether this indicator is overlaid on the price chart (true)
    /// or displayed in a separate pane (false).
    fn is_overlay(&self) -> bool;

    /// Human-readable label of the indicator.
    fn label(&self) -> String;
}
