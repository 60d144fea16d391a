// SPDX-License-Identifier: MPL-2.0
//! Open/close lifecycle of the preview overlay.

use crate::config::{CLOSE_GRACE_PERIOD, OPEN_ANIMATION};
use std::time::{Duration, Instant};

/// One-shot delay between a close request and unmounting.
///
/// The timer has no callback of its own: it is polled by animation ticks and
/// lives inside [`Phase::Closing`], so dropping the overlay cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraceTimer {
    started: Instant,
    deadline: Instant,
}

impl GraceTimer {
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self::with_period(now, CLOSE_GRACE_PERIOD)
    }

    #[must_use]
    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self {
            started: now,
            deadline: now + period,
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Fraction of the grace period already elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        fraction(self.started, now, self.deadline - self.started)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Open,
    Closing(GraceTimer),
    /// The grace period elapsed and the owner was notified.
    Finished,
}

impl Phase {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Phase::Open)
    }

    #[must_use]
    pub fn is_closing(self) -> bool {
        matches!(self, Phase::Closing(_))
    }
}

/// Entrance progress in `[0, 1]` for an overlay opened at `opened_at`.
#[must_use]
pub fn open_progress(opened_at: Instant, now: Instant) -> f32 {
    fraction(opened_at, now, OPEN_ANIMATION)
}

fn fraction(start: Instant, now: Instant, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
