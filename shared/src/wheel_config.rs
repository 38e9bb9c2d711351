use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::*;
use crate::wheel_prize::JackpotPolicy;

/// Everything the wheel needs at construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_wheel_config"))]
pub struct WheelConfig {
    // Spins granted per session
    #[validate(range(min = 1))]
    pub turns: u32,
    // Full rotations before the wheel settles on its sector
    #[validate(range(min = 1))]
    pub cycles: u32,
    pub max_spin_time: f32,
    pub game_over_sleep: f32,
    pub sector_angles: [f32; SECTOR_COUNT],
    pub jackpot_policy: JackpotPolicy,
    // Fixed seed for reproducible sessions, entropy when unset
    pub seed: Option<u64>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            turns: DEFAULT_TURNS,
            cycles: DEFAULT_CYCLES,
            max_spin_time: DEFAULT_MAX_SPIN_TIME,
            game_over_sleep: DEFAULT_GAME_OVER_SLEEP,
            sector_angles: DEFAULT_SECTOR_ANGLES,
            jackpot_policy: JackpotPolicy::default(),
            seed: None,
        }
    }
}

pub fn validate_wheel_config(config: &WheelConfig) -> Result<(), ValidationError> {
    validate_timings(config)?;
    validate_sector_angles(config)
}

pub fn validate_timings(config: &WheelConfig) -> Result<(), ValidationError> {
    if !config.max_spin_time.is_finite() || config.max_spin_time <= 0.0 {
        return Err(ValidationError::new("invalid_max_spin_time"));
    }
    if !config.game_over_sleep.is_finite() || config.game_over_sleep < 0.0 {
        return Err(ValidationError::new("invalid_game_over_sleep"));
    }
    Ok(())
}

pub fn validate_sector_angles(config: &WheelConfig) -> Result<(), ValidationError> {
    let in_range = |angle: &f32| angle.is_finite() && (0.0..FULL_TURN_DEGREES).contains(angle);
    if !config.sector_angles.iter().all(in_range) {
        return Err(ValidationError::new("invalid_sector_angle"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(WheelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_turns() {
        let config = WheelConfig { turns: 0, ..WheelConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_timings() {
        let config = WheelConfig { max_spin_time: 0.0, ..WheelConfig::default() };
        assert!(config.validate().is_err());
        let config = WheelConfig { game_over_sleep: f32::NAN, ..WheelConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_sector() {
        let mut config = WheelConfig::default();
        config.sector_angles[3] = 360.0;
        assert!(config.validate().is_err());
        config.sector_angles[3] = -1.0;
        assert!(config.validate().is_err());
    }
}
