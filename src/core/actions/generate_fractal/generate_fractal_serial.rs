use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::render_band::render_band;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::row_band::RowBand;

/// Fills the whole buffer on the calling thread as a single band.
pub fn generate_fractal_serial<Alg, CMap>(
    buffer: &mut PixelBuffer,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<(), PixelBufferError>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let whole_image = [RowBand::new(0, buffer.image_size().height())];

    for mut slice in buffer.split_bands_mut(&whole_image)? {
        render_band(&mut slice, algorithm, colour_map);
    }

    Ok(())
}
