//! The chart view-model: owns the bar series, the live subscription,
//! and the viewport, and assembles render-ready frames.

use stockservice_api::StockClient;
use tickchart_core::{BarSeries, ChartSeries, Interval, VolumePoint};
use tickchart_data::{HistoricalLoader, LiveFeed, StreamEvent};
use tickchart_indicators::{Indicator, IndicatorSeries, MovingAverage};

use crate::view::{ViewportTracker, ViewportWindow, ZoomEvent};

/// Lifecycle of a chart view.
///
/// `Ready` is long-lived and re-entrant: every tick re-triggers frame
/// recomputation without leaving the state. `TornDown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    /// Created, nothing requested yet.
    Idle,
    /// Historical fetch in flight, or failed with no retry pending.
    Loading,
    /// Bootstrap complete; live merges and recomputation running.
    Ready,
    /// Subscription closed, view finished.
    TornDown,
}

/// Everything the chart renderer consumes for one paint.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    /// Category axis labels (period end dates).
    pub labels: Vec<String>,
    /// Candle tuples in `[open, close, low, high]` order.
    pub ohlc: Vec<[f64; 4]>,
    /// Volume bars with direction markers.
    pub volume: Vec<VolumePoint>,
    /// One moving-average series per configured window size.
    pub indicators: Vec<IndicatorSeries>,
    /// The user's current zoom/pan window.
    pub viewport: ViewportWindow,
}

/// The chart view-model for one symbol/interval pair.
///
/// Owns its [`BarSeries`], subscription, and viewport exclusively;
/// nothing is shared across views or symbols.
pub struct ChartView {
    symbol: String,
    interval: Interval,
    ma_windows: Vec<usize>,
    series: BarSeries,
    phase: ChartPhase,
    loader: HistoricalLoader,
    feed: LiveFeed,
    viewport: ViewportTracker,
}

impl ChartView {
    /// Create an idle view for a symbol/interval pair.
    pub fn new(
        client: StockClient,
        symbol: impl Into<String>,
        interval: Interval,
        ma_windows: Vec<usize>,
    ) -> Self {
        let symbol = symbol.into();
        Self {
            series: BarSeries::new(symbol.clone(), interval),
            symbol,
            interval,
            ma_windows,
            phase: ChartPhase::Idle,
            loader: HistoricalLoader::new(client.clone()),
            feed: LiveFeed::new(client),
            viewport: ViewportTracker::new(),
        }
    }

    /// Bootstrap the view: fetch history, then start the live feed.
    ///
    /// On bootstrap failure the view stays in `Loading` with an empty
    /// series: the renderer keeps showing its loading indicator and no
    /// retry is scheduled. A failure to open the live stream leaves the
    /// view `Ready` on stale data. Neither failure is fatal.
    pub async fn open(&mut self) {
        self.phase = ChartPhase::Loading;

        match self.loader.load(&self.symbol, self.interval).await {
            Ok(series) => {
                self.series = series;
                self.phase = ChartPhase::Ready;
            }
            Err(e) => {
                log::error!("Bootstrap fetch failed for {}: {e}", self.symbol);
                return;
            }
        }

        // The live feed only starts once the baseline bar exists.
        if let Err(e) = self.feed.subscribe(&self.symbol).await {
            log::error!("Failed to open tick stream for {}: {e}", self.symbol);
        }
    }

    /// Receive the next live event.
    ///
    /// Returns `None` when no subscription is active or the stream has
    /// closed and drained.
    pub async fn next_event(&mut self) -> Option<StreamEvent> {
        self.feed.next().await
    }

    /// Fold a live event into the view.
    pub fn apply_event(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Update(patch) => {
                if self.phase != ChartPhase::Ready {
                    log::debug!("Ignoring tick outside Ready phase");
                    return;
                }
                self.series.merge_tail(&patch);
            }
            StreamEvent::Closed => {
                log::warn!(
                    "Live updates for {} stopped; chart continues on stale data",
                    self.symbol
                );
                self.feed.unsubscribe();
            }
        }
    }

    /// Assemble the render-ready frame from current state.
    ///
    /// Pure with respect to the series: recomputing after every merge
    /// yields the same frame for the same data.
    pub fn frame(&self) -> ChartFrame {
        let chart = ChartSeries::project(&self.series);
        let indicators = self
            .ma_windows
            .iter()
            .map(|&w| MovingAverage::new(w).calculate(&chart))
            .collect();

        ChartFrame {
            labels: chart.labels,
            ohlc: chart.ohlc,
            volume: chart.volume,
            indicators,
            viewport: self.viewport.current(),
        }
    }

    /// Record a user zoom/pan gesture. Never touches the bar series.
    pub fn on_user_zoom(&mut self, event: &ZoomEvent) {
        self.viewport.on_user_zoom(event);
    }

    /// Switch to a different symbol.
    ///
    /// The old subscription closes before anything else happens; the
    /// series is replaced by a fresh bootstrap and the viewport returns
    /// to its default (a new series identity).
    pub async fn switch_symbol(&mut self, symbol: impl Into<String>) {
        self.feed.unsubscribe();

        self.symbol = symbol.into();
        self.series = BarSeries::new(self.symbol.clone(), self.interval);
        self.viewport.reset();

        self.open().await;
    }

    /// Tear the view down, closing the subscription.
    pub fn close(&mut self) {
        self.feed.unsubscribe();
        self.phase = ChartPhase::TornDown;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ChartPhase {
        self.phase
    }

    /// The symbol this view charts.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The bar interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// The owned bar series.
    pub fn series(&self) -> &BarSeries {
        &self.series
    }
}
