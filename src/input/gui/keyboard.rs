use crate::controllers::frame_loop::ports::control_source::ControlSource;
use crate::core::view::controls::ControlSnapshot;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Tracks which explorer keys are held between frames.
///
/// Up/Down zoom, W/A/S/D pan, Space and Enter nudge `c`, Escape quits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardControls {
    up_held: bool,
    down_held: bool,
    w_held: bool,
    a_held: bool,
    s_held: bool,
    d_held: bool,
    space_held: bool,
    enter_held: bool,
    quit_pending: bool,
}

impl KeyboardControls {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::KeyW => self.w_held = pressed,
            KeyCode::KeyA => self.a_held = pressed,
            KeyCode::KeyS => self.s_held = pressed,
            KeyCode::KeyD => self.d_held = pressed,
            KeyCode::Space => self.space_held = pressed,
            KeyCode::Enter | KeyCode::NumpadEnter => self.enter_held = pressed,
            KeyCode::Escape if pressed => self.quit_pending = true,
            _ => {}
        }
    }

    /// Window close behaves like Escape.
    pub fn request_quit(&mut self) {
        self.quit_pending = true;
    }

    #[must_use]
    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            zoom_in: self.up_held,
            zoom_out: self.down_held,
            pan_up: self.w_held,
            pan_down: self.s_held,
            pan_left: self.a_held,
            pan_right: self.d_held,
            c_increase: self.space_held,
            c_decrease: self.enter_held,
            quit: self.quit_pending,
        }
    }

    /// Releases every held key. A pending quit survives.
    pub fn reset(&mut self) {
        *self = Self {
            quit_pending: self.quit_pending,
            ..Self::default()
        };
    }
}

impl ControlSource for KeyboardControls {
    fn poll(&mut self) -> ControlSnapshot {
        self.snapshot()
    }
}
