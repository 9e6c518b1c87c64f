//! Frame loop for real-time Julia set exploration.
//!
//! Each frame polls a [`ControlSource`], applies the held controls to the
//! view, renders the whole frame to completion and hands it to a
//! [`FramePresenter`]. Nothing is presented until every band has finished.

mod controller;
pub mod data;
pub mod errors;
pub mod ports;

pub use controller::{FPS_LOG_INTERVAL, FrameLoop, FrameLoopState};
pub use data::fps_window::FpsWindow;
pub use data::frame_data::FrameData;
pub use data::frame_stats::FrameStats;
pub use errors::FrameError;
pub use ports::control_source::ControlSource;
pub use ports::frame_presenter::{FramePresenter, PresentError};
