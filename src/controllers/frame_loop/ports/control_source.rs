use crate::core::view::controls::ControlSnapshot;

/// Supplies the controls held for the next frame.
pub trait ControlSource {
    fn poll(&mut self) -> ControlSnapshot;
}
