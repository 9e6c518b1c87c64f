pub mod fps_window;
pub mod frame_data;
pub mod frame_stats;
