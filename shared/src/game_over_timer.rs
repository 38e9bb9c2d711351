use serde::{Deserialize, Serialize};

/// One-shot delay advanced by host frame deltas.
///
/// Once armed it runs to completion: there is no cancel, and after it has
/// fired it stays spent until armed again.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GameOverTimer {
    remaining: Option<f32>,
    fired: bool,
}

impl GameOverTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, delay_seconds: f32) {
        self.remaining = Some(delay_seconds.max(0.0));
        self.fired = false;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Advances the countdown; returns true on the single tick it comes due.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining - delta_time;
        if remaining > 0.0 {
            self.remaining = Some(remaining);
            return false;
        }
        self.remaining = None;
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_timer_never_fires() {
        let mut timer = GameOverTimer::new();
        assert!(!timer.advance(100.0));
        assert!(!timer.has_fired());
    }

    #[test]
    fn test_fires_once_after_delay() {
        let mut timer = GameOverTimer::new();
        timer.arm(1.0);
        assert!(!timer.advance(0.5));
        assert!(!timer.advance(0.25));
        assert!(timer.advance(0.25));
        assert!(timer.has_fired());
        assert!(!timer.advance(10.0));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_zero_delay_fires_on_next_tick() {
        let mut timer = GameOverTimer::new();
        timer.arm(0.0);
        assert!(timer.advance(0.0));
    }
}
