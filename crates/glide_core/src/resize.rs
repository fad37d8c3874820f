//! Resize reaction schedule.
//!
//! A burst of resize signals is debounced into one re-layout. That pass then
//! schedules a single follow-up re-layout to absorb late reflow (images that
//! finish loading, web fonts swapping in). A newer resize signal supersedes
//! both: the debounce restarts and any pending follow-up is dropped, since
//! the next debounced pass schedules its own.

use crate::debounce::Debounce;
use instant::Instant;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which re-layout pass is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizePass {
    /// First pass, once resize signals have gone quiet.
    Debounced,
    /// Follow-up pass, `settle` after the debounced pass.
    Settle,
}

fn debounced_pass() -> ResizePass {
    ResizePass::Debounced
}

/// Debounce + delayed follow-up schedule for resize signals.
#[derive(Debug)]
pub struct ResizeReactor {
    debounce: Debounce<fn() -> ResizePass>,
    settle: Duration,
    settle_deadline: Option<Instant>,
}

impl ResizeReactor {
    pub fn new(debounce: Duration, settle: Duration) -> Self {
        Self {
            debounce: Debounce::new(debounce, debounced_pass as fn() -> ResizePass),
            settle,
            settle_deadline: None,
        }
    }

    /// A resize signal arrived at `now`.
    pub fn signal(&mut self, now: Instant) {
        self.debounce.call(now);
        self.settle_deadline = None;
    }

    /// Next pass due by `now`, if any. Call repeatedly until `None`.
    pub fn poll(&mut self, now: Instant) -> Option<ResizePass> {
        if let Some(pass) = self.debounce.poll(now) {
            self.settle_deadline = Some(now + self.settle);
            return Some(pass);
        }
        match self.settle_deadline {
            Some(deadline) if deadline <= now => {
                self.settle_deadline = None;
                Some(ResizePass::Settle)
            }
            _ => None,
        }
    }

    /// Earliest pending deadline, for arming a host timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debounce.deadline(), self.settle_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.next_deadline().is_none()
    }

    /// Drop every pending pass.
    pub fn cancel(&mut self) {
        self.debounce.cancel();
        self.settle_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn reactor() -> ResizeReactor {
        ResizeReactor::new(ms(50), ms(1000))
    }

    #[test]
    fn debounced_then_settle() {
        let t0 = Instant::now();
        let mut reactor = reactor();

        reactor.signal(t0);
        assert_eq!(reactor.next_deadline(), Some(t0 + ms(50)));
        assert_eq!(reactor.poll(t0 + ms(10)), None);

        assert_eq!(reactor.poll(t0 + ms(50)), Some(ResizePass::Debounced));
        assert_eq!(reactor.poll(t0 + ms(50)), None);
        assert_eq!(reactor.next_deadline(), Some(t0 + ms(1050)));

        assert_eq!(reactor.poll(t0 + ms(1050)), Some(ResizePass::Settle));
        assert!(reactor.is_idle());
    }

    #[test]
    fn new_signal_supersedes_pending_settle() {
        let t0 = Instant::now();
        let mut reactor = reactor();

        reactor.signal(t0);
        reactor.poll(t0 + ms(50));
        reactor.signal(t0 + ms(500));

        assert_eq!(reactor.next_deadline(), Some(t0 + ms(550)));
        assert_eq!(reactor.poll(t0 + ms(1050)), Some(ResizePass::Debounced));
        // The old follow-up at +1050 is gone; the new one is relative to now.
        assert_eq!(reactor.next_deadline(), Some(t0 + ms(2050)));
    }

    #[test]
    fn late_poll_drains_both_passes() {
        let t0 = Instant::now();
        let mut reactor = ResizeReactor::new(ms(50), Duration::ZERO);

        reactor.signal(t0);
        let late = t0 + ms(5000);
        assert_eq!(reactor.poll(late), Some(ResizePass::Debounced));
        assert_eq!(reactor.poll(late), Some(ResizePass::Settle));
        assert_eq!(reactor.poll(late), None);
    }

    #[test]
    fn cancel_clears_schedule() {
        let t0 = Instant::now();
        let mut reactor = reactor();

        reactor.signal(t0);
        reactor.cancel();
        assert!(reactor.is_idle());
        assert_eq!(reactor.poll(t0 + ms(5000)), None);
    }
}
