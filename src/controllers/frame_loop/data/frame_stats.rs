use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frames_rendered: u64,
    pub elapsed: Duration,
}

impl FrameStats {
    #[must_use]
    pub fn average_fps(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();

        if seconds > 0.0 {
            self.frames_rendered as f64 / seconds
        } else {
            0.0
        }
    }
}
