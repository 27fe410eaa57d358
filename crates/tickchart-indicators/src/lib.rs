//! Indicator framework for chart overlays.

pub mod indicator;
pub mod sma;

pub use indicator::{Indicator, IndicatorSeries, MaPoint};
pub use sma::MovingAverage;
