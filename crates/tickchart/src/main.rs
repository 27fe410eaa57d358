//! Tickchart - real-time candlestick data pipeline for the stock-service chart.

mod chart;
mod view;

use anyhow::{Context, Result};
use stockservice_api::{Config as ApiConfig, StockClient};
use tickchart_core::Interval;
use tickchart_data::StreamEvent;

use chart::ChartView;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}

#[tokio::main]
async fn run() -> Result<()> {
    env_logger::init();

    let config = tickchart_config::Config::load_default();

    let interval: Interval = config
        .general
        .interval
        .parse()
        .with_context(|| format!("invalid interval {:?}", config.general.interval))?;

    let api_config = ApiConfig::new(config.api.base_url.clone())
        .with_timeout(std::time::Duration::from_secs(config.api.timeout_secs));
    let client = StockClient::new(api_config)?;

    let mut view = ChartView::new(
        client,
        config.general.symbol.clone(),
        interval,
        config.chart.ma_windows.clone(),
    );

    view.open().await;
    log_frame(&view);

    while let Some(event) = view.next_event().await {
        let closed = matches!(event, StreamEvent::Closed);
        view.apply_event(event);
        log_frame(&view);
        if closed {
            break;
        }
    }

    view.close();
    Ok(())
}

fn log_frame(view: &ChartView) {
    let frame = view.frame();
    let tail_close = frame.ohlc.last().map(|c| c[1]).unwrap_or(0.0);
    log::info!(
        "{} [{}] {:?}: {} bars, tail close {tail_close}, viewport {:.0}..{:.0}",
        view.symbol(),
        view.interval(),
        view.phase(),
        frame.ohlc.len(),
        frame.viewport.start,
        frame.viewport.end,
    );
}
