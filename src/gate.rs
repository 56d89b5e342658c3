//! Pending-delay gate.
//!
//! Every scheduled visual delay holds the gate open; player input arriving
//! while any delay is in flight waits in the inbox and is handed back, in
//! arrival order, once the last delay completes.

use std::collections::VecDeque;

#[derive(Debug)]
pub struct DelayGate<E> {
    pending: u32,
    inbox: VecDeque<E>,
}

impl<E> Default for DelayGate<E> {
    fn default() -> Self {
        Self { pending: 0, inbox: VecDeque::new() }
    }
}

impl<E> DelayGate<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending == 0
    }

    pub fn queued(&self) -> usize {
        self.inbox.len()
    }

    /// Returns the event for immediate handling, or parks it until idle.
    pub fn admit(&mut self, event: E) -> Option<E> {
        if self.is_idle() && self.inbox.is_empty() {
            Some(event)
        } else {
            self.inbox.push_back(event);
            None
        }
    }

    /// A delay was scheduled.
    pub fn enter(&mut self) {
        self.pending += 1;
    }

    /// A delay completed. Saturates at zero.
    pub fn leave(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Next parked event, only while no delay is in flight.
    pub fn next_ready(&mut self) -> Option<E> {
        if self.is_idle() { self.inbox.pop_front() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_passes_through_when_idle() {
        let mut gate = DelayGate::new();
        assert_eq!(gate.admit(1), Some(1));
        assert_eq!(gate.queued(), 0);
    }

    #[test]
    fn test_events_wait_for_all_delays() {
        let mut gate = DelayGate::new();
        gate.enter();
        gate.enter();
        assert_eq!(gate.admit('a'), None);
        assert_eq!(gate.admit('b'), None);
        gate.leave();
        assert_eq!(gate.next_ready(), None);
        gate.leave();
        assert!(gate.is_idle());
        assert_eq!(gate.next_ready(), Some('a'));
        // a later arrival must not overtake parked events
        assert_eq!(gate.admit('c'), None);
        assert_eq!(gate.next_ready(), Some('b'));
        assert_eq!(gate.next_ready(), Some('c'));
        assert_eq!(gate.next_ready(), None);
    }

    #[test]
    fn test_leave_saturates() {
        let mut gate: DelayGate<()> = DelayGate::new();
        gate.leave();
        assert_eq!(gate.pending(), 0);
    }
}
