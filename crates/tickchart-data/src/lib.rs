//! Data acquisition for the tickchart pipeline: historical bootstrap
//! and the live tick subscription.

pub mod live;
pub mod loader;
pub mod stockservice;

pub use live::{LiveFeed, StreamEvent, Subscription};
pub use loader::HistoricalLoader;
