#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewWarning {
    /// A zoom step would have left zoom non-positive or non-finite.
    ZoomOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewUpdateReport {
    pub quit_requested: bool,
    pub view_changed: bool,
    pub warning: Option<ViewWarning>,
}
