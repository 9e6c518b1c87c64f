use crate::controllers::frame_loop::ports::control_source::ControlSource;
use crate::core::view::controls::ControlSnapshot;
use std::collections::VecDeque;

/// Replays a fixed sequence of control snapshots, then holds quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedControls {
    frames: VecDeque<ControlSnapshot>,
}

impl ScriptedControls {
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = ControlSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Appends `count` frames holding `controls`.
    #[must_use]
    pub fn then_hold(mut self, controls: ControlSnapshot, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(controls, count));
        self
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl ControlSource for ScriptedControls {
    fn poll(&mut self) -> ControlSnapshot {
        self.frames.pop_front().unwrap_or(ControlSnapshot::QUIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_frames_in_order() {
        let zoom_in = ControlSnapshot {
            zoom_in: true,
            ..ControlSnapshot::default()
        };
        let mut controls = ScriptedControls::new([ControlSnapshot::default(), zoom_in]);

        assert_eq!(controls.poll(), ControlSnapshot::default());
        assert_eq!(controls.poll(), zoom_in);
        assert_eq!(controls.remaining(), 0);
    }

    #[test]
    fn holds_quit_once_exhausted() {
        let mut controls = ScriptedControls::default();

        assert_eq!(controls.poll(), ControlSnapshot::QUIT);
        assert_eq!(controls.poll(), ControlSnapshot::QUIT);
    }

    #[test]
    fn then_hold_repeats_snapshot() {
        let pan_left = ControlSnapshot {
            pan_left: true,
            ..ControlSnapshot::default()
        };
        let mut controls = ScriptedControls::default().then_hold(pan_left, 3);

        assert_eq!(controls.remaining(), 3);
        for _ in 0..3 {
            assert_eq!(controls.poll(), pan_left);
        }
        assert_eq!(controls.poll(), ControlSnapshot::QUIT);
    }
}
