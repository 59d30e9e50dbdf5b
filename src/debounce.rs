//! Depth-1 "latest request wins" queue with a quiet window.
//!
//! Bursts of requests (slider drags) collapse into one: submitting while a
//! request is pending replaces it, and a request is only handed out once no
//! newer one has arrived for the whole quiet window. Time is passed in
//! explicitly, so the queue works with any event loop or timer.
use log::debug;
use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct LatestRequest<T> {
    quiet_window: Duration,
    pending: Option<Pending<T>>,
    superseded: u64,
}

#[derive(Debug)]
struct Pending<T> {
    request: T,
    submitted_at: Instant,
}

impl<T> LatestRequest<T> {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            pending: None,
            superseded: 0,
        }
    }

    /// Queue `request`, returning the pending request it replaced.
    pub fn submit(&mut self, request: T, now: Instant) -> Option<T> {
        let previous = self.pending.replace(Pending {
            request,
            submitted_at: now,
        });
        previous.map(|p| {
            self.superseded += 1;
            debug!(
                "LatestRequest: superseded pending request ({} total)",
                self.superseded
            );
            p.request
        })
    }

    /// Take the pending request if the quiet window has elapsed since it was
    /// submitted.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.submitted_at) >= self.quiet_window);
        if ready {
            self.pending.take().map(|p| p.request)
        } else {
            None
        }
    }

    /// Take the pending request immediately, ignoring the quiet window.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.request)
    }

    /// Drop the pending request, if any.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending request becomes ready.
    pub fn ready_at(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|p| p.submitted_at + self.quiet_window)
    }

    /// Number of requests replaced before they ran.
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }
}

impl<T> Default for LatestRequest<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}
