//! Debounce combinator.
//!
//! Wraps a handler and a delay: the handler runs once input has stopped
//! arriving for the full delay. Each new call pushes the deadline out.
//! Time is supplied by the caller, so the same combinator works under a
//! browser timer, a test clock, or a frame loop.

use instant::Instant;
use std::fmt;
use std::time::Duration;

/// Delay `handler` until calls stop arriving for `delay`.
pub struct Debounce<F> {
    handler: F,
    delay: Duration,
    deadline: Option<Instant>,
}

impl<F> fmt::Debug for Debounce<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("delay", &self.delay)
            .field("deadline", &self.deadline)
            .finish()
    }
}

impl<F, R> Debounce<F>
where
    F: FnMut() -> R,
{
    pub fn new(delay: Duration, handler: F) -> Self {
        Self {
            handler,
            delay,
            deadline: None,
        }
    }

    /// Register an input at `now`, restarting the quiet period.
    pub fn call(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Run the handler if the quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<R> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                Some((self.handler)())
            }
            _ => None,
        }
    }

    /// When the handler will next be due, if a call is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Drop a pending call without running the handler.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut runs = 0;
        let mut debounce = Debounce::new(ms(50), || {
            runs += 1;
            runs
        });

        debounce.call(t0);
        assert_eq!(debounce.poll(t0 + ms(49)), None);
        assert_eq!(debounce.poll(t0 + ms(50)), Some(1));
        assert_eq!(debounce.poll(t0 + ms(500)), None);
    }

    #[test]
    fn burst_coalesces_into_one_run() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(ms(50), || "ran");

        for step in 0..10 {
            debounce.call(t0 + ms(step * 10));
        }
        // Last call at +90ms, so nothing before +140ms.
        assert_eq!(debounce.poll(t0 + ms(139)), None);
        assert_eq!(debounce.deadline(), Some(t0 + ms(140)));
        assert_eq!(debounce.poll(t0 + ms(140)), Some("ran"));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn cancel_drops_pending_call() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(ms(50), || ());

        debounce.call(t0);
        debounce.cancel();
        assert_eq!(debounce.poll(t0 + ms(100)), None);
    }
}
