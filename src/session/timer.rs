//! Countdown timer, advanced one second per tick.

use serde::{Deserialize, Serialize};

/// Seconds left in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    limit_secs: u32,
    remaining_secs: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit_secs,
            remaining_secs: limit_secs,
        }
    }

    /// Take one second off. Saturates at zero.
    pub fn tick(&mut self) -> u32 {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.limit_secs - self.remaining_secs
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Back to the full limit.
    pub fn restart(&mut self) {
        self.remaining_secs = self.limit_secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), 2);
        assert_eq!(countdown.tick(), 1);
        assert!(!countdown.is_expired());
        assert_eq!(countdown.tick(), 0);
        assert!(countdown.is_expired());
        assert_eq!(countdown.tick(), 0);
        assert_eq!(countdown.elapsed(), 3);

        countdown.restart();
        assert_eq!(countdown.remaining(), 3);
        assert_eq!(countdown.elapsed(), 0);
    }
}
