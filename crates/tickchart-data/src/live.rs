//! Live tick subscription management.
//!
//! One [`LiveFeed`] serves one chart view. Subscribing spawns a reader
//! task that pumps the SSE stream into a channel; the task is aborted
//! whenever the subscription is replaced, closed, or dropped, so the
//! transport is released on every exit path.

use stockservice_api::{Error, Result, StockClient, TickStream};
use tickchart_core::PriceBarPatch;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::stockservice::update_to_patch;

/// Events emitted by an active subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A decoded tick, ready to merge into the current-period bar.
    Update(PriceBarPatch),
    /// The stream ended, either by the server or a transport failure.
    /// No reconnection is attempted.
    Closed,
}

/// An active tick subscription for one symbol.
#[derive(Debug)]
pub struct Subscription {
    symbol: String,
    events: mpsc::Receiver<StreamEvent>,
    task: JoinHandle<()>,
}

impl Subscription {
    fn new(symbol: String, events: mpsc::Receiver<StreamEvent>, task: JoinHandle<()>) -> Self {
        Self {
            symbol,
            events,
            task,
        }
    }

    /// The symbol this subscription delivers ticks for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Receive the next event. Returns `None` once the subscription is
    /// closed and the channel is drained.
    pub async fn next(&mut self) -> Option<StreamEvent> {
        self.events.recv().await
    }

    /// Close the subscription, stopping the reader task.
    pub fn close(&mut self) {
        self.task.abort();
        self.events.close();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Manages the live tick subscription for a chart view.
pub struct LiveFeed {
    client: StockClient,
    active: Option<Subscription>,
}

impl LiveFeed {
    /// Create a feed with no active subscription.
    pub fn new(client: StockClient) -> Self {
        Self {
            client,
            active: None,
        }
    }

    /// Subscribe to live ticks for a symbol.
    ///
    /// Any prior subscription is closed first; at most one reader task
    /// exists per feed.
    pub async fn subscribe(&mut self, symbol: &str) -> Result<()> {
        self.unsubscribe();

        let stream = TickStream::open(&self.client, symbol).await?;
        let (event_tx, event_rx) = mpsc::channel(100);

        let task_symbol = symbol.to_string();
        let task = tokio::spawn(async move {
            pump_ticks(stream, event_tx, task_symbol).await;
        });

        self.active = Some(Subscription::new(symbol.to_string(), event_rx, task));
        Ok(())
    }

    /// Close the active subscription, if any.
    pub fn unsubscribe(&mut self) {
        if let Some(mut sub) = self.active.take() {
            sub.close();
        }
    }

    /// Receive the next event from the active subscription.
    ///
    /// Returns `None` when nothing is subscribed or the subscription
    /// has closed and drained.
    pub async fn next(&mut self) -> Option<StreamEvent> {
        match self.active.as_mut() {
            Some(sub) => sub.next().await,
            None => None,
        }
    }

    /// The currently subscribed symbol, if any.
    pub fn symbol(&self) -> Option<&str> {
        self.active.as_ref().map(Subscription::symbol)
    }

    /// Whether a subscription is active.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Pump decoded ticks from the stream into the event channel.
///
/// A malformed payload is dropped and the stream stays open; a
/// transport error or server-side end closes the subscription for good.
async fn pump_ticks(mut stream: TickStream, event_tx: mpsc::Sender<StreamEvent>, symbol: String) {
    loop {
        match stream.next().await {
            Some(Ok(update)) => {
                let patch = update_to_patch(update);
                if event_tx.send(StreamEvent::Update(patch)).await.is_err() {
                    // Receiver dropped; nothing left to deliver to.
                    break;
                }
            }
            Some(Err(Error::Json(e))) => {
                log::warn!("Dropping malformed tick for {symbol}: {e}");
            }
            Some(Err(e)) => {
                log::error!("Tick stream transport error for {symbol}: {e}");
                let _ = event_tx.send(StreamEvent::Closed).await;
                break;
            }
            None => {
                log::info!("Tick stream for {symbol} ended");
                let _ = event_tx.send(StreamEvent::Closed).await;
                break;
            }
        }
    }
}
