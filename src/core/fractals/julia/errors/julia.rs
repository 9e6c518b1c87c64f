use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JuliaError {
    ZeroMaxIterationsError,
    InvalidBoundaryRadius { radius: f64 },
}

impl fmt::Display for JuliaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidBoundaryRadius { radius } => {
                write!(f, "Boundary radius must be positive and finite, got {}", radius)
            }
        }
    }
}

impl Error for JuliaError {}
