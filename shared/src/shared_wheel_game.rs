use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::*;
use crate::game_over_timer::GameOverTimer;
use crate::wheel_config::WheelConfig;
use crate::wheel_easing::{ease, lerp};
use crate::wheel_error::{WheelError, WheelResult};
use crate::wheel_prize::resolve_prize;

/// Snapshot of the wheel as the host sees it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelState {
    pub sector_angles: [f32; SECTOR_COUNT],
    pub remaining_turns: u32,
    pub total_winnings: u64,
    pub current_angle: f32,
    pub start_angle: f32,
    pub target_angle: f32,
    pub elapsed_spin_time: f32,
    pub is_spinning: bool,
    pub chosen_sector_index: Option<usize>,
}

/// Result of one completed spin
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub sector: usize,
    pub prize: u32,
    pub total_winnings: u64,
    pub remaining_turns: u32,
}

/// What a single `tick` did
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum TickEvent {
    Idle,
    Spinning { angle: f32 },
    SpinFinished(SpinOutcome),
    GameOver,
}

/// Whoever owns the flow between levels. Called once when the session ends.
pub trait LevelAdvance {
    fn advance_to_next_level(&mut self);
}

pub struct WheelController {
    config: WheelConfig,
    state: WheelState,
    spin_enabled: bool,
    last_outcome: Option<SpinOutcome>,
    game_over_timer: GameOverTimer,
    level: Box<dyn LevelAdvance>,
    rng: StdRng,
}

impl WheelController {
    pub fn new(config: WheelConfig, level: Box<dyn LevelAdvance>) -> WheelResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut controller = Self {
            state: WheelState {
                sector_angles: config.sector_angles,
                remaining_turns: config.turns,
                total_winnings: 0,
                current_angle: 0.0,
                start_angle: 0.0,
                target_angle: 0.0,
                elapsed_spin_time: 0.0,
                is_spinning: false,
                chosen_sector_index: None,
            },
            config,
            spin_enabled: false,
            last_outcome: None,
            game_over_timer: GameOverTimer::new(),
            level,
            rng,
        };
        controller.initialize();
        Ok(controller)
    }

    /// Resets the session: full turns, no winnings, wheel resting on a random sector.
    pub fn initialize(&mut self) {
        let resting = self.state.sector_angles[self.rng.gen_range(0..SECTOR_COUNT)];

        self.state.remaining_turns = self.config.turns;
        self.state.total_winnings = 0;
        // The wheel is drawn at -resting while the first spin lerps from +resting
        self.state.start_angle = resting;
        self.state.current_angle = -resting;
        self.state.target_angle = -resting;
        self.state.elapsed_spin_time = 0.0;
        self.state.is_spinning = false;
        self.state.chosen_sector_index = None;

        self.last_outcome = None;
        self.game_over_timer = GameOverTimer::new();
        self.spin_enabled = true;
    }

    /// Starts a spin towards a uniformly drawn sector.
    pub fn spin(&mut self) -> WheelResult<()> {
        self.check_can_spin()?;
        let sector = self.rng.gen_range(0..SECTOR_COUNT);
        self.spin_to_sector(sector)
    }

    /// Starts a spin that will land on `sector`.
    pub fn spin_to_sector(&mut self, sector: usize) -> WheelResult<()> {
        self.check_can_spin()?;
        let Some(&angle) = self.state.sector_angles.get(sector) else {
            return Err(WheelError::InvalidSpinRequest { reason: UNKNOWN_SECTOR_ERROR });
        };

        self.spin_enabled = false;
        self.state.chosen_sector_index = Some(sector);
        self.state.target_angle = target_angle(self.config.cycles, angle);
        self.state.elapsed_spin_time = 0.0;
        self.state.is_spinning = true;
        Ok(())
    }

    fn check_can_spin(&self) -> WheelResult<()> {
        if self.state.is_spinning {
            return Err(WheelError::InvalidSpinRequest { reason: SPIN_IN_PROGRESS_ERROR });
        }
        if self.state.remaining_turns == 0 {
            return Err(WheelError::InvalidSpinRequest { reason: NO_TURNS_LEFT_ERROR });
        }
        Ok(())
    }

    /// Advances the wheel by one host frame.
    pub fn tick(&mut self, delta_time: f32) -> TickEvent {
        let delta_time = delta_time.max(0.0);

        if !self.state.is_spinning {
            if self.game_over_timer.advance(delta_time) {
                log::info!("🎡 Session over with {} in winnings, advancing level", self.winnings_text());
                self.level.advance_to_next_level();
                return TickEvent::GameOver;
            }
            return TickEvent::Idle;
        }

        self.state.elapsed_spin_time += delta_time;

        let timed_out = self.state.elapsed_spin_time > self.config.max_spin_time;
        let settled = (self.state.current_angle - self.state.target_angle).abs() < STOP_TOLERANCE_DEGREES;
        if timed_out || settled {
            return TickEvent::SpinFinished(self.finish_spin());
        }

        let t = self.state.elapsed_spin_time / self.config.max_spin_time;
        self.state.current_angle = lerp(self.state.start_angle, self.state.target_angle, ease(t));
        TickEvent::Spinning { angle: self.state.current_angle }
    }

    fn finish_spin(&mut self) -> SpinOutcome {
        self.state.elapsed_spin_time = self.config.max_spin_time;
        self.state.start_angle = self.state.target_angle % FULL_TURN_DEGREES;
        self.state.current_angle = self.state.target_angle;
        self.state.is_spinning = false;

        // Out of range index falls through to the zero prize
        let sector = self.state.chosen_sector_index.unwrap_or(SECTOR_COUNT);
        let prize = resolve_prize(sector, self.config.jackpot_policy, &mut self.rng);
        self.state.total_winnings += u64::from(prize);
        self.state.remaining_turns = self.state.remaining_turns.saturating_sub(1);

        let outcome = SpinOutcome {
            sector,
            prize,
            total_winnings: self.state.total_winnings,
            remaining_turns: self.state.remaining_turns,
        };
        log::info!(
            "🎡 WHEEL SPIN: landed on sector {} and won {} ({} turns left)",
            sector,
            prize,
            outcome.remaining_turns
        );

        if self.state.remaining_turns == 0 {
            self.game_over_timer.arm(self.config.game_over_sleep);
        } else {
            self.spin_enabled = true;
        }

        self.last_outcome = Some(outcome.clone());
        outcome
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn current_angle(&self) -> f32 {
        self.state.current_angle
    }

    pub fn last_outcome(&self) -> Option<&SpinOutcome> {
        self.last_outcome.as_ref()
    }

    /// Whether the spin button should be interactable.
    pub fn is_spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    pub fn is_game_over(&self) -> bool {
        self.state.remaining_turns == 0 && !self.state.is_spinning
    }

    pub fn has_advanced_level(&self) -> bool {
        self.game_over_timer.has_fired()
    }

    pub fn turns_text(&self) -> String {
        self.state.remaining_turns.to_string()
    }

    pub fn winnings_text(&self) -> String {
        format_winnings(self.state.total_winnings)
    }
}

/// Stop angle for a spin: `cycles` full turns past the sector, clockwise.
pub fn target_angle(cycles: u32, sector_angle: f32) -> f32 {
    -(cycles as f32 * FULL_TURN_DEGREES + sector_angle)
}

pub fn format_winnings(amount: u64) -> String {
    format!("${:.2}", amount as f64)
}
