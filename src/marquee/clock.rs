use std::time::{Duration, Instant};

/// Frame-to-frame elapsed time tracking for the autoplay loop.
///
/// The clock records every frame timestamp it is given, including frames where
/// the caller ends up not moving anything. Movement is therefore always
/// measured against the previous frame and never against a backlog.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    resync: bool,
    max_delta: Duration,
}

impl FrameClock {
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last: None,
            resync: false,
            max_delta: max_delta.max(Duration::from_millis(1)),
        }
    }

    /// Records `now` and returns the elapsed time that may be turned into
    /// movement for this frame.
    ///
    /// Returns `None` for the first frame after creation and for the first
    /// frame after [`resync`](Self::resync).
    pub fn advance(&mut self, now: Instant) -> Option<Duration> {
        let previous = self.last.replace(now);
        if std::mem::take(&mut self.resync) {
            return None;
        }
        let elapsed = now.saturating_duration_since(previous?);
        Some(elapsed.min(self.max_delta))
    }

    /// Makes the next frame record its timestamp without yielding a delta.
    pub fn resync(&mut self) {
        self.resync = true;
    }
}
