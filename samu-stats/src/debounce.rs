//! Trailing-edge debounce.
//!
//! The debouncer holds at most one pending payload. Every `schedule` call
//! replaces it and hands out a new [`Ticket`]; the timer that owns the
//! latest ticket is the only one whose `fire` yields the payload. Timers of
//! superseded tickets wake up and find nothing to do, which is how the
//! cancel-and-reschedule rule is expressed without cancelling timers.

/// Quiescence window in milliseconds between the last filter change and
/// the recomputation.
pub const QUIESCENCE_MS: u64 = 300;

/// Handle identifying one `schedule` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Pending<T> {
    ticket: Ticket,
    due_at: u64,
    payload: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    window_ms: u64,
    next_ticket: u64,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(QUIESCENCE_MS)
    }
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Schedule `payload`, superseding anything still pending.
    pub fn schedule(&mut self, now_ms: u64, payload: T) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        if self.pending.is_some() {
            log::debug!("Debounce: rescheduling, previous update superseded");
        }
        self.pending = Some(Pending {
            ticket,
            due_at: now_ms.saturating_add(self.window_ms),
            payload,
        });
        ticket
    }

    /// Take the pending payload if `ticket` is the latest one and its
    /// window has elapsed at `now_ms`.
    pub fn fire(&mut self, ticket: Ticket, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if p.ticket == ticket && now_ms >= p.due_at => {
                self.pending.take().map(|p| p.payload)
            }
            _ => None,
        }
    }

    /// Whether `ticket` is still the pending one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.pending.as_ref().is_some_and(|p| p.ticket == ticket)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending payload, if any.
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_window_elapsed() {
        let mut d = Debouncer::new(300);
        let t = d.schedule(1_000, "a");
        assert_eq!(d.due_at(), Some(1_300));
        assert_eq!(d.fire(t, 1_299), None);
        assert!(d.is_pending());
        assert_eq!(d.fire(t, 1_300), Some("a"));
        assert!(!d.is_pending());
        assert_eq!(d.fire(t, 1_400), None);
    }

    #[test]
    fn burst_within_window_fires_once_with_last_payload() {
        let mut d = Debouncer::new(QUIESCENCE_MS);
        let t1 = d.schedule(0, 1);
        let t2 = d.schedule(100, 2);
        let t3 = d.schedule(200, 3);

        // Each timer wakes up one window after its own schedule call.
        let fired: Vec<i32> = [(t1, 300), (t2, 400), (t3, 500)]
            .into_iter()
            .filter_map(|(t, now)| d.fire(t, now))
            .collect();
        assert_eq!(fired, vec![3]);
    }

    #[test]
    fn superseded_ticket_is_not_current() {
        let mut d = Debouncer::default();
        let t1 = d.schedule(0, ());
        assert!(d.is_current(t1));
        let t2 = d.schedule(10, ());
        assert!(!d.is_current(t1));
        assert!(d.is_current(t2));
        assert_ne!(t1, t2);
    }

    #[test]
    fn schedule_after_fire_starts_new_window() {
        let mut d = Debouncer::new(300);
        let t1 = d.schedule(0, "first");
        assert_eq!(d.fire(t1, 300), Some("first"));
        let t2 = d.schedule(1_000, "second");
        assert_eq!(d.fire(t2, 1_100), None);
        assert_eq!(d.fire(t2, 1_300), Some("second"));
    }
}
