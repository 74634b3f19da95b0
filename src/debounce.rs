//! Single-slot debounce gate.
//!
//! Holds at most one pending deadline. Scheduling replaces whatever was
//! pending, so only the latest call inside a quiet period ever fires. The
//! caller drives it from the frame loop by polling with the current time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }
    
    pub fn delay(&self) -> Duration {
        self.delay
    }
    
    /// Cancels any pending deadline and arms a new one at `now + delay`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }
    
    /// Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }
    
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    
    /// Consumes the pending deadline if it has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
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

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut gate = Debouncer::new(DELAY);
        gate.schedule(start);
        
        assert!(!gate.poll(start + Duration::from_millis(299)));
        assert!(gate.poll(start + DELAY));
        assert!(!gate.poll(start + DELAY * 2));
        assert!(gate.deadline().is_none());
    }

    #[test]
    fn rescheduling_pushes_the_deadline_back() {
        let start = Instant::now();
        let mut gate = Debouncer::new(DELAY);
        gate.schedule(start);
        gate.schedule(start + Duration::from_millis(100));
        gate.schedule(start + Duration::from_millis(200));
        
        assert_eq!(gate.deadline(), Some(start + Duration::from_millis(500)));
        assert!(!gate.poll(start + Duration::from_millis(400)));
        assert!(gate.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn cancel_drops_pending_deadline() {
        let start = Instant::now();
        let mut gate = Debouncer::new(DELAY);
        assert!(!gate.cancel());
        
        gate.schedule(start);
        assert!(gate.cancel());
        assert!(!gate.poll(start + DELAY));
    }
}
