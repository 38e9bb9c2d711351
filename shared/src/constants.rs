pub const SECTOR_COUNT: usize = 8;
pub const DEFAULT_SECTOR_ANGLES: [f32; SECTOR_COUNT] = [1.0, 46.0, 91.0, 136.0, 181.0, 226.0, 271.0, 316.0];

pub const DEFAULT_TURNS: u32 = 3;
pub const DEFAULT_CYCLES: u32 = 5;
pub const DEFAULT_MAX_SPIN_TIME: f32 = 5.0;
pub const DEFAULT_GAME_OVER_SLEEP: f32 = 2.0;

// Within this many degrees of the target the wheel counts as stopped
pub const STOP_TOLERANCE_DEGREES: f32 = 1.0;
pub const FULL_TURN_DEGREES: f32 = 360.0;

pub const JACKPOT_SECTOR: usize = 5;
// Bounds as they ship: low is above high, so the range is empty
pub const JACKPOT_LOW: u32 = 1500;
pub const JACKPOT_HIGH: u32 = 500;

pub const SPIN_IN_PROGRESS_ERROR: &str = "the wheel is already spinning";
pub const NO_TURNS_LEFT_ERROR: &str = "no turns left";
pub const UNKNOWN_SECTOR_ERROR: &str = "sector index out of range";
