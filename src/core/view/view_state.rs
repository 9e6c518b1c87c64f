use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::vector2::Vector2;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewStateError {
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be positive and finite, got {}", zoom)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Zoom, pan centre and Julia parameter for the current frame.
///
/// `zoom` is always positive and finite. Larger zoom means each pixel covers
/// a smaller region of the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f64,
    centre: Vector2,
    c: Complex,
}

impl ViewState {
    pub fn new(zoom: f64, centre: Vector2, c: Complex) -> Result<Self, ViewStateError> {
        if !is_valid_zoom(zoom) {
            return Err(ViewStateError::InvalidZoom { zoom });
        }

        Ok(Self { zoom, centre, c })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn centre(&self) -> Vector2 {
        self.centre
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    #[must_use]
    pub fn pixel_to_complex(&self, x: u32, y: u32, image_size: ImageSize) -> Complex {
        pixel_to_complex_coords(x, y, image_size, self.centre, self.zoom)
    }

    /// Returns false and leaves zoom untouched when `zoom` is not usable.
    pub(crate) fn try_set_zoom(&mut self, zoom: f64) -> bool {
        if !is_valid_zoom(zoom) {
            return false;
        }

        self.zoom = zoom;
        true
    }

    pub(crate) fn pan(&mut self, offset: Vector2) {
        self.centre += offset;
    }

    pub(crate) fn shift_c_real(&mut self, delta: f64) {
        self.c.real += delta;
    }
}

fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}
