/// Controls held during one frame, sampled before the view is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlSnapshot {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub pan_left: bool,
    pub pan_right: bool,
    pub c_increase: bool,
    pub c_decrease: bool,
    pub quit: bool,
}

impl ControlSnapshot {
    pub const QUIT: Self = Self {
        zoom_in: false,
        zoom_out: false,
        pan_up: false,
        pan_down: false,
        pan_left: false,
        pan_right: false,
        c_increase: false,
        c_decrease: false,
        quit: true,
    };
}
