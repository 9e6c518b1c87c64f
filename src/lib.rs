#[cfg(feature = "gui")]
mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use config::{ConfigError, KernelConfig};
pub use controllers::frame_loop::{
    ControlSource, FrameData, FrameError, FrameLoop, FrameLoopState, FramePresenter, FrameStats,
    PresentError,
};
pub use crate::core::actions::generate_fractal::tile_scheduler::{
    SchedulerStrategy, TileScheduler, TileSchedulerError,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::image_size::ImageSize;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
pub use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
pub use crate::core::fractals::julia::colour_mapping::quadratic_gradient_map::QuadraticGradientMap;
pub use crate::core::fractals::julia::escape_time::smooth_escape_time;
pub use crate::core::view::{ControlSnapshot, ViewState};
pub use input::scripted::ScriptedControls;
pub use presenters::checksum::{ChecksumPresenter, frame_checksum};

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
