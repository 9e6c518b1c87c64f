use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::row_band::RowBand;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateFractalParallelError {
    PixelBuffer(PixelBufferError),
    WorkerPanicked { band: RowBand },
}

impl fmt::Display for GenerateFractalParallelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::WorkerPanicked { band } => write!(
                f,
                "worker for rows {}..{} panicked",
                band.start_row(),
                band.end_row()
            ),
        }
    }
}

impl Error for GenerateFractalParallelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
            Self::WorkerPanicked { .. } => None,
        }
    }
}

impl From<PixelBufferError> for GenerateFractalParallelError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}
