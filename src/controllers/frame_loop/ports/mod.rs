pub mod control_source;
pub mod frame_presenter;
