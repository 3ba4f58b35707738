//! Cancellable deadline timer
//!
//! The autocomplete box reschedules a lookup on every keystroke; only
//! after the configured idle period does the pending lookup fire. The
//! event loop polls `fire_at` each frame with the current instant, which
//! keeps the timer testable without sleeping.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)schedule: replaces any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed; the timer
    /// clears itself so the scheduled action runs at most once per
    /// schedule call.
    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(200);

    #[test]
    fn fires_after_delay() {
        let mut timer = Debounce::new(DELAY);
        let start = Instant::now();
        timer.schedule(start);

        assert!(!timer.fire_at(start));
        assert!(!timer.fire_at(start + Duration::from_millis(199)));
        assert!(timer.fire_at(start + DELAY));
    }

    #[test]
    fn fires_only_once_per_schedule() {
        let mut timer = Debounce::new(DELAY);
        let start = Instant::now();
        timer.schedule(start);

        assert!(timer.fire_at(start + DELAY));
        assert!(!timer.fire_at(start + DELAY * 2));
    }

    #[test]
    fn reschedule_pushes_the_deadline() {
        let mut timer = Debounce::new(DELAY);
        let start = Instant::now();
        timer.schedule(start);
        timer.schedule(start + Duration::from_millis(150));

        // Old deadline has passed, new one has not.
        assert!(!timer.fire_at(start + Duration::from_millis(250)));
        assert!(timer.fire_at(start + Duration::from_millis(350)));
    }

    #[test]
    fn cancel_discards_the_deadline() {
        let mut timer = Debounce::new(DELAY);
        let start = Instant::now();
        timer.schedule(start);
        timer.cancel();

        assert!(!timer.is_pending());
        assert!(!timer.fire_at(start + DELAY * 10));
    }
}
