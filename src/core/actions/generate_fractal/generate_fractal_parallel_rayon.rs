use std::panic::{self, AssertUnwindSafe};

use rayon::ThreadPool;
use rayon::prelude::*;

use crate::core::actions::generate_fractal::errors::GenerateFractalParallelError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::render_band::render_band;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::row_band::RowBand;

/// Renders every band as one job on a persistent rayon pool.
///
/// `install` blocks until all band jobs have finished. A panicking band is
/// caught and reported instead of unwinding through the pool.
pub fn generate_fractal_parallel_rayon<Alg, CMap>(
    pool: &ThreadPool,
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

    let outcomes: Vec<Result<(), RowBand>> = pool.install(|| {
        slices
            .into_par_iter()
            .map(|mut slice| {
                let band = slice.band();
                panic::catch_unwind(AssertUnwindSafe(|| {
                    render_band(&mut slice, algorithm, colour_map);
                }))
                .map_err(|_| band)
            })
            .collect()
    });

    match outcomes.into_iter().find_map(Result::err) {
        Some(band) => Err(GenerateFractalParallelError::WorkerPanicked { band }),
        None => Ok(()),
    }
}
