use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::julia::escape_time::smooth_escape_time;
use crate::core::fractals::julia::params::EscapeParams;
use crate::core::view::view_state::ViewState;

/// Julia escape-time evaluation bound to one frame's view.
///
/// Produces the smoothed escape count divided by the iteration budget,
/// clamped to `[0, 1]` so it can go straight into a gradient lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    view: ViewState,
    image_size: ImageSize,
    params: EscapeParams,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = f64;

    fn compute(&self, x: u32, y: u32) -> Self::Success {
        let coord = self.view.pixel_to_complex(x, y, self.image_size);
        let iterations = smooth_escape_time(
            coord,
            self.view.c(),
            self.params.max_iterations(),
            self.params.boundary_radius(),
        );

        (iterations / f64::from(self.params.max_iterations())).clamp(0.0, 1.0)
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(view: ViewState, image_size: ImageSize, params: EscapeParams) -> Self {
        Self {
            view,
            image_size,
            params,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }
}
