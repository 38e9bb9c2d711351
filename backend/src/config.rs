use std::str::FromStr;
use std::time::Duration;

use fortune_shared::{JackpotPolicy, WheelConfig};

use crate::error::Error;

const DEFAULT_FRAME_MS: u64 = 16;

/// Host side settings: the wheel config plus how the frame loop is paced.
#[derive(Debug, Clone, PartialEq)]
pub struct HostSettings {
    pub wheel: WheelConfig,
    pub frame: Duration,
    // Sleep between frames; otherwise the session runs as fast as it can
    pub realtime: bool,
}

impl HostSettings {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut wheel = WheelConfig::default();

        if let Some(turns) = parse_var(&lookup, "WHEEL_TURNS")? {
            wheel.turns = turns;
        }
        if let Some(cycles) = parse_var(&lookup, "WHEEL_CYCLES")? {
            wheel.cycles = cycles;
        }
        if let Some(max_spin_time) = parse_var(&lookup, "WHEEL_MAX_SPIN_TIME")? {
            wheel.max_spin_time = max_spin_time;
        }
        if let Some(game_over_sleep) = parse_var(&lookup, "WHEEL_GAME_OVER_SLEEP")? {
            wheel.game_over_sleep = game_over_sleep;
        }
        if let Some(seed) = parse_var(&lookup, "WHEEL_SEED")? {
            wheel.seed = Some(seed);
        }
        if let Some(name) = lookup("WHEEL_JACKPOT_POLICY") {
            wheel.jackpot_policy = JackpotPolicy::from_name(&name).ok_or_else(|| {
                Error::Config(format!("WHEEL_JACKPOT_POLICY must be 'forfeit' or 'swap', got '{}'", name))
            })?;
        }

        let frame_ms = parse_var(&lookup, "WHEEL_FRAME_MS")?.unwrap_or(DEFAULT_FRAME_MS);
        if frame_ms == 0 {
            return Err(Error::Config("WHEEL_FRAME_MS must be at least 1".to_string()));
        }
        let realtime = parse_var(&lookup, "WHEEL_REALTIME")?.unwrap_or(true);

        Ok(Self {
            wheel,
            frame: Duration::from_millis(frame_ms),
            realtime,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has an invalid value: '{}'", key, raw))),
        None => Ok(None),
    }
}
