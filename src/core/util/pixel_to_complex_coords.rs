use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::vector2::Vector2;

/// Maps pixel `(x, y)` into the complex plane for a view centred on `centre`.
///
/// `((x - width/2 + centre.x) / zoom, (y - height/2 + centre.y) / zoom)`, with
/// integer halves of the image dimensions.
#[must_use]
pub fn pixel_to_complex_coords(
    x: u32,
    y: u32,
    image_size: ImageSize,
    centre: Vector2,
    zoom: f64,
) -> Complex {
    let real = (f64::from(x) - f64::from(image_size.half_width()) + centre.x) / zoom;
    let imag = (f64::from(y) - f64::from(image_size.half_height()) + centre.y) / zoom;

    Complex { real, imag }
}
