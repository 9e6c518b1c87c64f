use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    TooFewStops { stops: usize },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewStops { stops } => {
                write!(f, "gradient needs at least 2 colour stops, got {}", stops)
            }
        }
    }
}

impl Error for GradientError {}
