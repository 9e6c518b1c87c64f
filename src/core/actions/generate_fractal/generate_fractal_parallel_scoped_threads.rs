use std::thread;

use crate::core::actions::generate_fractal::errors::GenerateFractalParallelError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::render_band::render_band;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::row_band::RowBand;

/// Spawns one scoped thread per band and joins all of them before returning.
///
/// Every handle is joined even after a failure so no worker outlives the
/// frame; the first band whose worker panicked is reported.
pub fn generate_fractal_parallel_scoped_threads<Alg, CMap>(
    buffer: &mut PixelBuffer,
    bands: &[RowBand],
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<(), GenerateFractalParallelError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let slices = buffer.split_bands_mut(bands)?;

    let failed_band = thread::scope(|scope| {
        let handles = slices
            .into_iter()
            .map(|mut slice| {
                let band = slice.band();
                let handle = scope.spawn(move || render_band(&mut slice, algorithm, colour_map));
                (band, handle)
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .fold(None, |failed, (band, handle)| match handle.join() {
                Ok(()) => failed,
                Err(_) => failed.or(Some(band)),
            })
    });

    match failed_band {
        Some(band) => Err(GenerateFractalParallelError::WorkerPanicked { band }),
        None => Ok(()),
    }
}
