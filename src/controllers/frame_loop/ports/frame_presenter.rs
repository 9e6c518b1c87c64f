use crate::controllers::frame_loop::data::frame_data::FrameData;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentError {
    pub generation: u64,
    pub message: String,
}

impl PresentError {
    pub fn new(generation: u64, message: impl Into<String>) -> Self {
        Self {
            generation,
            message: message.into(),
        }
    }
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to present frame {}: {}",
            self.generation, self.message
        )
    }
}

impl Error for PresentError {}

/// Receives each completed frame.
pub trait FramePresenter {
    fn present(&mut self, frame: &FrameData<'_>) -> Result<(), PresentError>;
}
