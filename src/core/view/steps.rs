use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewStepsError {
    ZoomFactorNotAboveOne { zoom_factor: f64 },
    NonPositivePanOffset { pan_base_offset: f64 },
    NonPositiveCStep { c_step: f64 },
}

impl fmt::Display for ViewStepsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomFactorNotAboveOne { zoom_factor } => {
                write!(f, "zoom factor must be finite and greater than 1, got {}", zoom_factor)
            }
            Self::NonPositivePanOffset { pan_base_offset } => {
                write!(f, "pan base offset must be finite and positive, got {}", pan_base_offset)
            }
            Self::NonPositiveCStep { c_step } => {
                write!(f, "parameter step must be finite and positive, got {}", c_step)
            }
        }
    }
}

impl Error for ViewStepsError {}

/// Per-frame increments applied while a control is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSteps {
    zoom_factor: f64,
    pan_base_offset: f64,
    c_step: f64,
}

impl ViewSteps {
    pub fn new(
        zoom_factor: f64,
        pan_base_offset: f64,
        c_step: f64,
    ) -> Result<Self, ViewStepsError> {
        if !zoom_factor.is_finite() || zoom_factor <= 1.0 {
            return Err(ViewStepsError::ZoomFactorNotAboveOne { zoom_factor });
        }

        if !pan_base_offset.is_finite() || pan_base_offset <= 0.0 {
            return Err(ViewStepsError::NonPositivePanOffset { pan_base_offset });
        }

        if !c_step.is_finite() || c_step <= 0.0 {
            return Err(ViewStepsError::NonPositiveCStep { c_step });
        }

        Ok(Self {
            zoom_factor,
            pan_base_offset,
            c_step,
        })
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn pan_base_offset(&self) -> f64 {
        self.pan_base_offset
    }

    #[must_use]
    pub fn c_step(&self) -> f64 {
        self.c_step
    }
}
