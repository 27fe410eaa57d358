//! Server-sent-event stream for real-time tick updates.

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::collections::VecDeque;
use std::pin::Pin;

use crate::client::StockClient;
use crate::error::{Error, Result};
use crate::types::TickUpdate;

type ByteStream = Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>;

/// An open SSE subscription delivering [`TickUpdate`]s for one symbol.
///
/// The stream stays open until the server closes it, the transport
/// fails, or the value is dropped. A malformed payload surfaces as a
/// `Err(Error::Json)` item without ending the stream.
pub struct TickStream {
    inner: ByteStream,
    parser: SseParser,
}

impl TickStream {
    /// Open the tick stream for a symbol.
    pub async fn open(client: &StockClient, symbol: &str) -> Result<Self> {
        if symbol.is_empty() {
            return Err(Error::InvalidParameter("symbol must not be empty".into()));
        }

        let response = client
            .get_stream(&format!("/stockDetails/sse/stream/{symbol}"))
            .await?;

        Ok(Self {
            inner: Box::pin(response.bytes_stream()),
            parser: SseParser::new(),
        })
    }

    /// Receive the next tick.
    ///
    /// Returns `None` when the server ends the stream.
    pub async fn next(&mut self) -> Option<Result<TickUpdate>> {
        loop {
            if let Some(payload) = self.parser.next_payload() {
                return Some(serde_json::from_str(&payload).map_err(Error::Json));
            }

            match self.inner.next().await {
                Some(Ok(chunk)) => self.parser.feed(&chunk),
                Some(Err(e)) => return Some(Err(Error::Http(e))),
                None => return None,
            }
        }
    }
}

impl std::fmt::Debug for TickStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickStream").finish_non_exhaustive()
    }
}

/// Incremental parser for the `text/event-stream` wire format.
///
/// Accumulates `data:` lines per event and emits the joined payload on
/// the blank-line event boundary. Comment, `event:`, `id:` and `retry:`
/// lines are ignored; this feed only ever carries JSON tick payloads.
#[derive(Debug, Default)]
struct SseParser {
    line_buf: String,
    data_lines: Vec<String>,
    ready: VecDeque<String>,
}

impl SseParser {
    fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes from the transport.
    fn feed(&mut self, chunk: &[u8]) {
        self.line_buf.push_str(&String::from_utf8_lossy(chunk));

        while let Some(pos) = self.line_buf.find('\n') {
            let line: String = self.line_buf.drain(..=pos).collect();
            let line = line.trim_end_matches(['\n', '\r']);
            self.process_line(line);
        }
    }

    fn process_line(&mut self, line: &str) {
        if line.is_empty() {
            // Event boundary: dispatch accumulated data, if any.
            if !self.data_lines.is_empty() {
                let payload = std::mem::take(&mut self.data_lines).join("\n");
                self.ready.push_back(payload);
            }
        } else if line.starts_with(':') {
            // Comment / keep-alive.
        } else if let Some(value) = line.strip_prefix("data:") {
            let value = value.strip_prefix(' ').unwrap_or(value);
            self.data_lines.push(value.to_string());
        }
        // Other fields (event:, id:, retry:) carry nothing for this feed.
    }

    /// Take the next complete event payload, if one is buffered.
    fn next_payload(&mut self) -> Option<String> {
        self.ready.pop_front()
    }
}
