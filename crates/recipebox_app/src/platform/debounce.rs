use std::time::{Duration, Instant};

/// Trailing-edge debouncer: holds the most recently submitted value
/// until no new submission has arrived for `delay`, then releases it
/// exactly once. A new submission before the quiet period elapses
/// supersedes the pending value and restarts the wait.
#[derive(Debug)]
pub(crate) struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub(crate) fn submit(&mut self, value: T) {
        self.submit_at(Instant::now(), value);
    }

    pub(crate) fn submit_at(&mut self, now: Instant, value: T) {
        self.pending = Some((now, value));
    }

    pub(crate) fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    pub(crate) fn poll_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((since, _)) if now.duration_since(*since) >= self.delay => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }
}
