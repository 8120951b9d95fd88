//! Wall-clock search control.

use std::time::{Duration, Instant};

/// A fixed point in time after which the search must wind down.
///
/// The search polls [`Deadline::expired`] at every node it enters. Once
/// the deadline passes, recursion bottoms out with static evaluations and
/// the iterative-deepening driver discards the interrupted depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    /// Deadline `budget` from now.
    pub fn after(budget: Duration) -> Deadline {
        Deadline {
            end: Instant::now() + budget,
        }
    }

    /// Whether the deadline has passed.
    #[inline]
    pub fn expired(&self) -> bool {
        Instant::now() >= self.end
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Deadline;

    #[test]
    fn fresh_deadline_with_large_budget_is_not_expired() {
        let deadline = Deadline::after(Duration::from_secs(3600));
        assert!(!deadline.expired());
    }

    #[test]
    fn zero_budget_expires_immediately() {
        let deadline = Deadline::after(Duration::ZERO);
        assert!(deadline.expired());
    }

    #[test]
    fn deadlines_are_copyable_checkpoints() {
        let deadline = Deadline::after(Duration::from_secs(3600));
        let copy = deadline;
        assert_eq!(deadline, copy);
        assert!(!copy.expired());
    }
}
