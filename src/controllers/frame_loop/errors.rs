use crate::config::ConfigError;
use crate::controllers::frame_loop::ports::frame_presenter::PresentError;
use crate::core::actions::generate_fractal::tile_scheduler::TileSchedulerError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FrameError {
    Config(ConfigError),
    Scheduler(TileSchedulerError),
    Present(PresentError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::Scheduler(err) => write!(f, "{}", err),
            Self::Present(err) => write!(f, "{}", err),
        }
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Scheduler(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

impl From<ConfigError> for FrameError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<TileSchedulerError> for FrameError {
    fn from(err: TileSchedulerError) -> Self {
        Self::Scheduler(err)
    }
}

impl From<PresentError> for FrameError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}
