use std::fmt;

use fortune_shared::WheelError;

#[derive(Debug)]
pub enum Error {
    Config(String),
    Wheel(WheelError),
}

impl From<WheelError> for Error {
    fn from(err: WheelError) -> Self {
        Error::Wheel(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(message) => write!(f, "configuration error: {}", message),
            Error::Wheel(e) => write!(f, "wheel error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(_) => None,
            Error::Wheel(e) => Some(e),
        }
    }
}
