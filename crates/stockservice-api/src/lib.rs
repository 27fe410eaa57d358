//! # Stock-Service API Client Library
//!
//! Typed Rust client for the stock-service backend powering the price
//! chart: historical OHLCV snapshots over REST and incremental tick
//! updates over server-sent events.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockservice_api::{StockClient, StockDetailsApi, TickStream};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stockservice_api::Error> {
//!     let client = StockClient::local()?;
//!
//!     // Bootstrap snapshot
//!     let details = StockDetailsApi::new(client.clone());
//!     let rows = details.historical_filter("AAA", "1w").await?;
//!     println!("{} historical bars", rows.len());
//!
//!     // Live tick stream
//!     let mut ticks = TickStream::open(&client, "AAA").await?;
//!     while let Some(tick) = ticks.next().await {
//!         match tick {
//!             Ok(update) => println!("tick: {update:?}"),
//!             Err(e) => eprintln!("bad tick: {e}"),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod market;
pub mod sse;
pub mod types;

// Re-exports for convenience
pub use client::StockClient;
pub use config::Config;
pub use error::{ApiError, Error, Result};
pub use market::StockDetailsApi;
pub use sse::TickStream;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL for a locally running stock-service
pub const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Prelude module for convenient imports.
pub mod prelude {
    //! Common imports for using the stock-service API client.

    pub use crate::client::StockClient;
    pub use crate::config::Config;
    pub use crate::error::{ApiError, Error, Result};
    pub use crate::market::StockDetailsApi;
    pub use crate::sse::TickStream;
    pub use crate::types::{BarRecord, TickUpdate};
}
