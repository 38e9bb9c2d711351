use std::cell::Cell;
use std::rc::Rc;

use fortune_shared::LevelAdvance;
use tracing::info;

pub const WHEEL_LEVEL: u32 = 1;
pub const LAST_LEVEL: u32 = 2;

/// Tracks which stage the player is on. The wheel hands over to the last level.
#[derive(Debug, Clone)]
pub struct LevelManager {
    current: Rc<Cell<u32>>,
}

impl LevelManager {
    pub fn new() -> Self {
        Self {
            current: Rc::new(Cell::new(WHEEL_LEVEL)),
        }
    }

    pub fn current_level(&self) -> u32 {
        self.current.get()
    }

    pub fn last_level(&self) {
        info!("🏁 Moving to level {}", LAST_LEVEL);
        self.current.set(LAST_LEVEL);
    }
}

impl Default for LevelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelAdvance for LevelManager {
    fn advance_to_next_level(&mut self) {
        self.last_level();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_on_the_wheel() {
        assert_eq!(LevelManager::default().current_level(), WHEEL_LEVEL);
    }

    #[test]
    fn test_clones_share_the_level() {
        let manager = LevelManager::new();
        let mut handle = manager.clone();
        assert_eq!(manager.current_level(), WHEEL_LEVEL);
        handle.advance_to_next_level();
        assert_eq!(manager.current_level(), LAST_LEVEL);
    }
}
