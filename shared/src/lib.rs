pub mod constants;
pub mod game_over_timer;
pub mod shared_wheel_game;
pub mod wheel_config;
pub mod wheel_easing;
pub mod wheel_error;
pub mod wheel_prize;

pub use crate::game_over_timer::GameOverTimer;
pub use crate::shared_wheel_game::{
    format_winnings, target_angle, LevelAdvance, SpinOutcome, TickEvent, WheelController, WheelState,
};
pub use crate::wheel_config::WheelConfig;
pub use crate::wheel_error::{WheelError, WheelResult};
pub use crate::wheel_prize::{prize_for_sector, resolve_prize, JackpotPolicy, PrizeRange};
