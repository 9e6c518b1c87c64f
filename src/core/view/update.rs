use crate::core::data::vector2::Vector2;
use crate::core::view::controls::ControlSnapshot;
use crate::core::view::status::{ViewUpdateReport, ViewWarning};
use crate::core::view::steps::ViewSteps;
use crate::core::view::view_state::ViewState;
use log::warn;

/// Applies one frame of held controls to the view.
///
/// The pan distance is taken from the zoom at the start of the frame, so a
/// frame that both zooms and pans moves by the same amount whichever control
/// is applied first.
pub fn step_view(
    view: &mut ViewState,
    controls: ControlSnapshot,
    steps: &ViewSteps,
) -> ViewUpdateReport {
    let mut report = ViewUpdateReport {
        quit_requested: controls.quit,
        ..ViewUpdateReport::default()
    };

    let pan_offset = steps.pan_base_offset() / view.zoom();
    let direction = Vector2::new(
        axis_from_pair(controls.pan_right, controls.pan_left),
        axis_from_pair(controls.pan_down, controls.pan_up),
    );

    if direction != Vector2::ZERO {
        view.pan(direction * pan_offset);
        report.view_changed = true;
    }

    let zoom_direction = axis_from_pair(controls.zoom_in, controls.zoom_out);
    if zoom_direction != 0.0 {
        let zoom = if zoom_direction > 0.0 {
            view.zoom() * steps.zoom_factor()
        } else {
            view.zoom() / steps.zoom_factor()
        };

        if view.try_set_zoom(zoom) {
            report.view_changed = true;
        } else {
            warn!(
                "zoom step from {:e} rejected: result {:e} is outside the representable range",
                view.zoom(),
                zoom
            );
            report.warning = Some(ViewWarning::ZoomOutOfRange);
        }
    }

    let c_direction = axis_from_pair(controls.c_increase, controls.c_decrease);
    if c_direction != 0.0 {
        view.shift_c_real(c_direction * steps.c_step());
        report.view_changed = true;
    }

    report
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
