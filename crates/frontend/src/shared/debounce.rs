//! Timer-agnostic debounce state.
//!
//! Every `push` hands out a ticket and the caller arms a timer that calls
//! `fire(ticket)` after the delay. Only the ticket from the latest push yields
//! the value, so timers armed by superseded pushes fire into nothing. In the
//! browser the previous `gloo_timers::callback::Timeout` is also dropped on
//! every push, which cancels it outright.

/// Ticket returned by [`Debouncer::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    delay_ms: u32,
    generation: u64,
    pending: Option<T>,
    closed: bool,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
            closed: false,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Store `value` as the latest candidate. Returns `None` once closed.
    pub fn push(&mut self, value: T) -> Option<DebounceTicket> {
        if self.closed {
            return None;
        }
        self.generation += 1;
        self.pending = Some(value);
        Some(DebounceTicket(self.generation))
    }

    /// Called when the timer armed for `ticket` elapses.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if self.closed || ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop any pending value and stop accepting new ones.
    /// Returns `true` only for the call that actually closed it.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut d = Debouncer::new(300);
        let t1 = d.push("a").unwrap();
        let t2 = d.push("ab").unwrap();
        let t3 = d.push("abc").unwrap();

        assert_eq!(d.fire(t1), None);
        assert_eq!(d.fire(t2), None);
        assert_eq!(d.fire(t3), Some("abc"));
        // the value is consumed
        assert_eq!(d.fire(t3), None);
    }

    #[test]
    fn test_separate_windows_fire_separately() {
        let mut d = Debouncer::new(300);
        let t1 = d.push(1).unwrap();
        assert_eq!(d.fire(t1), Some(1));
        let t2 = d.push(2).unwrap();
        assert_eq!(d.fire(t2), Some(2));
    }

    #[test]
    fn test_close_releases_once_and_ignores_later_events() {
        let mut d = Debouncer::new(300);
        let t = d.push("pending").unwrap();

        assert!(d.close());
        assert!(!d.close());
        assert_eq!(d.fire(t), None);
        assert_eq!(d.push("late"), None);
    }
}
