use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

/// A deadline that fires at most once.
///
/// The owner polls it from its event loop; dropping or cancelling the
/// timer guarantees it never fires afterwards.
#[derive(Debug, Clone)]
pub struct OneShot {
    deadline: Instant,
    state: TimerState,
}

impl OneShot {
    pub fn after(delay: Duration, now: Instant) -> Self {
        Self {
            deadline: now + delay,
            state: TimerState::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == TimerState::Pending
    }

    /// Returns true exactly once: on the first poll at or past the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Pending && now >= self.deadline {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        if self.state == TimerState::Pending {
            self.state = TimerState::Cancelled;
        }
    }

    /// Time left before firing, or None once fired or cancelled
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.is_pending()
            .then(|| self.deadline.saturating_duration_since(now))
    }
}
