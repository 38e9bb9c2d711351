use validator::ValidationErrors;

#[derive(thiserror::Error, Debug)]
pub enum WheelError {
    #[error("spin rejected: {reason}")]
    InvalidSpinRequest { reason: &'static str },
    #[error("prize range is inverted: low {low} is above high {high}")]
    InvalidPrizeRange { low: u32, high: u32 },
    #[error("invalid wheel config: {0}")]
    InvalidConfig(#[from] ValidationErrors),
}

pub type WheelResult<T> = Result<T, WheelError>;
