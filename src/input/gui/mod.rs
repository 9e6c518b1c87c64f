//! Windowed explorer using winit for the window and pixels for the surface.

mod app;
pub mod keyboard;

pub use app::run_gui;
