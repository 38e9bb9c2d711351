use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{JACKPOT_HIGH, JACKPOT_LOW, JACKPOT_SECTOR};
use crate::wheel_error::{WheelError, WheelResult};

/// What to do with the jackpot sector, whose shipped range is inverted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum JackpotPolicy {
    /// Keep the shipped behavior: the empty range pays nothing.
    #[default]
    Forfeit,
    /// Draw from `[high, low)` instead.
    SwapBounds,
}

impl JackpotPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "forfeit" => Some(Self::Forfeit),
            "swap" | "swap_bounds" => Some(Self::SwapBounds),
            _ => None,
        }
    }
}

/// Half-open integer range `[low, high)`. Never reorders its bounds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PrizeRange {
    pub low: u32,
    pub high: u32,
}

impl PrizeRange {
    pub const JACKPOT: PrizeRange = PrizeRange { low: JACKPOT_LOW, high: JACKPOT_HIGH };

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    pub fn swapped(self) -> Self {
        Self { low: self.high, high: self.low }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> WheelResult<u32> {
        if self.is_inverted() {
            return Err(WheelError::InvalidPrizeRange { low: self.low, high: self.high });
        }
        if self.low == self.high {
            return Ok(self.low);
        }
        Ok(rng.gen_range(self.low..self.high))
    }
}

/// Fixed payout of a sector. Unknown indices pay nothing.
pub fn fixed_prize(sector: usize) -> Option<u32> {
    match sector {
        0 => Some(1000),
        1 | 4 => Some(600),
        2 | 7 => Some(400),
        3 | 6 => Some(100),
        JACKPOT_SECTOR => None,
        _ => Some(0),
    }
}

/// Prize for `sector` with the jackpot range taken as is.
///
/// The jackpot sector returns [`WheelError::InvalidPrizeRange`] until the
/// bounds are resolved, see [`resolve_prize`].
pub fn prize_for_sector<R: Rng + ?Sized>(sector: usize, rng: &mut R) -> WheelResult<u32> {
    match fixed_prize(sector) {
        Some(prize) => Ok(prize),
        None => PrizeRange::JACKPOT.sample(rng),
    }
}

/// Prize for `sector` with the jackpot handled by `policy`.
pub fn resolve_prize<R: Rng + ?Sized>(sector: usize, policy: JackpotPolicy, rng: &mut R) -> u32 {
    match prize_for_sector(sector, rng) {
        Ok(prize) => prize,
        Err(WheelError::InvalidPrizeRange { low, high }) => match policy {
            JackpotPolicy::Forfeit => {
                log::warn!("Jackpot range [{}, {}) is empty, sector {} pays 0", low, high, sector);
                0
            }
            JackpotPolicy::SwapBounds => {
                let range = PrizeRange { low, high }.swapped();
                range.sample(rng).unwrap_or(range.low)
            }
        },
        Err(e) => {
            log::warn!("Unexpected prize error for sector {}: {}", sector, e);
            0
        }
    }
}
