//! Deterministic timer queue.
//!
//! Time is injected as a monotonic `Duration` since the flow started, so the
//! frontend feeds wall-clock ticks and tests feed simulated ones.

use std::time::Duration;

use shared::domain::ContactMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    ClearFieldError(ContactMethod),
    ClearBanner,
    ReturnToInitial,
}

#[derive(Debug, Clone)]
struct ScheduledTimer {
    id: TimerId,
    due: Duration,
    kind: TimerKind,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<ScheduledTimer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTimer {
            id,
            due: now.saturating_add(delay),
            kind,
        });
        id
    }

    /// Returns `false` when the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        self.pending.len() != before
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<TimerKind> {
        let mut due = Vec::new();
        self.pending.retain(|timer| {
            if timer.due <= now {
                due.push(timer.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|timer| (timer.due, timer.id));
        due.into_iter().map(|timer| timer.kind).collect()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|timer| timer.due).min()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|timer| timer.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn fires_only_once_deadline_is_reached() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(secs(0), secs(3), TimerKind::ClearBanner);

        assert!(scheduler.drain_due(Duration::from_millis(2_999)).is_empty());
        assert_eq!(scheduler.drain_due(secs(3)), vec![TimerKind::ClearBanner]);
        assert!(scheduler.drain_due(secs(10)).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn drains_in_deadline_then_creation_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(secs(0), secs(5), TimerKind::ReturnToInitial);
        scheduler.schedule(secs(0), secs(3), TimerKind::ClearFieldError(ContactMethod::Handle));
        scheduler.schedule(secs(0), secs(3), TimerKind::ClearBanner);

        assert_eq!(
            scheduler.drain_due(secs(6)),
            vec![
                TimerKind::ClearFieldError(ContactMethod::Handle),
                TimerKind::ClearBanner,
                TimerKind::ReturnToInitial,
            ]
        );
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(secs(1), secs(3), TimerKind::ClearBanner);
        assert!(scheduler.is_pending(id));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.drain_due(secs(60)).is_empty());
    }

    #[test]
    fn reports_earliest_deadline() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.next_deadline(), None);
        scheduler.schedule(secs(2), secs(5), TimerKind::ReturnToInitial);
        scheduler.schedule(secs(2), secs(3), TimerKind::ClearBanner);
        assert_eq!(scheduler.next_deadline(), Some(secs(5)));
        assert_eq!(scheduler.len(), 2);
    }
}
