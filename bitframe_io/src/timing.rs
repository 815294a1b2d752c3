//! Single-shot deadline polling.

use std::time::{Duration, Instant};

/// A point in time to poll against while waiting on a session.
///
/// A zero timeout produces an already-expired deadline, which is how
/// non-blocking attempts are expressed throughout this crate.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    #[inline(always)]
    pub fn after(timeout: Duration) -> Self {
        Self {
            end: Instant::now() + timeout,
        }
    }

    #[inline(always)]
    pub fn expired(&self) -> bool {
        Instant::now() >= self.end
    }

    /// Time left until expiry, saturating at zero.
    #[inline(always)]
    pub fn remaining(&self) -> Duration {
        self.end.saturating_duration_since(Instant::now())
    }
}
