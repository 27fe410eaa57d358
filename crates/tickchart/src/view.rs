//! Viewport state for the chart view.
//!
//! The visible slice of the series is owned here, by the view instance,
//! and survives every data refresh. Only a symbol/interval change (a new
//! series identity) resets it.

/// The visible slice of the series, as start/end percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportWindow {
    /// Left edge, percent of the full range.
    pub start: f64,
    /// Right edge, percent of the full range.
    pub end: f64,
}

impl ViewportWindow {
    /// The default window: the most recent 1% of the range.
    pub const DEFAULT: Self = Self {
        start: 99.0,
        end: 100.0,
    };

    /// Create a window from start/end percentages.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

impl Default for ViewportWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A user zoom/pan gesture batch as reported by the renderer.
///
/// The renderer may coalesce several windows into one callback; only
/// the first entry is authoritative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoomEvent {
    /// Coalesced windows, newest first.
    pub batch: Vec<ViewportWindow>,
}

impl ZoomEvent {
    /// Create a single-window gesture.
    pub fn single(start: f64, end: f64) -> Self {
        Self {
            batch: vec![ViewportWindow::new(start, end)],
        }
    }
}

/// Remembers the user's zoom/pan window across data refreshes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportTracker {
    window: ViewportWindow,
}

impl ViewportTracker {
    /// Create a tracker at the default window.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current window.
    pub fn current(&self) -> ViewportWindow {
        self.window
    }

    /// Record a user gesture, overwriting the window from the first
    /// batch entry. An empty batch changes nothing.
    pub fn on_user_zoom(&mut self, event: &ZoomEvent) {
        if let Some(window) = event.batch.first() {
            self.window = *window;
        }
    }

    /// Reset to the default window. Called on symbol/interval change
    /// only, never on a data refresh.
    pub fn reset(&mut self) {
        self.window = ViewportWindow::DEFAULT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_last_percent() {
        let tracker = ViewportTracker::new();
        assert_eq!(tracker.current(), ViewportWindow::new(99.0, 100.0));
    }

    #[test]
    fn test_zoom_overwrites_from_first_entry() {
        let mut tracker = ViewportTracker::new();
        let event = ZoomEvent {
            batch: vec![
                ViewportWindow::new(80.0, 100.0),
                ViewportWindow::new(10.0, 20.0),
            ],
        };

        tracker.on_user_zoom(&event);
        assert_eq!(tracker.current(), ViewportWindow::new(80.0, 100.0));
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut tracker = ViewportTracker::new();
        tracker.on_user_zoom(&ZoomEvent::single(50.0, 75.0));

        tracker.on_user_zoom(&ZoomEvent::default());
        assert_eq!(tracker.current(), ViewportWindow::new(50.0, 75.0));
    }

    #[test]
    fn test_reset_restores_default() {
        let mut tracker = ViewportTracker::new();
        tracker.on_user_zoom(&ZoomEvent::single(0.0, 100.0));

        tracker.reset();
        assert_eq!(tracker.current(), ViewportWindow::DEFAULT);
    }
}
