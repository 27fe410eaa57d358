//! Core types for the tickchart pipeline.
//!
//! This crate provides fundamental data structures with no external dependencies:
//! - `PriceBar` / `PriceBarPatch` - one OHLCV observation and a partial update
//! - `BarSeries` - the per-symbol bar collection with its tail-only mutator
//! - `Interval` - chart period enumeration
//! - `ChartSeries` - render-ready projection of a bar series

pub mod bar;
pub mod interval;
pub mod series;

pub use bar::{BarSeries, PriceBar, PriceBarPatch};
pub use interval::Interval;
pub use series::{ChartSeries, VolumePoint};
