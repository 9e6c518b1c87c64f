use std::error::Error;
use std::fmt;

use log::info;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::core::actions::generate_fractal::errors::GenerateFractalParallelError;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_parallel_scoped_threads::generate_fractal_parallel_scoped_threads;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::row_band::RowBand;
use crate::core::util::calculate_row_bands::{RowBandError, calculate_row_bands};

/// How band workers are provided each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerStrategy {
    /// Spawn and join one scoped thread per band every frame.
    ScopedThreads,
    /// Reuse a rayon pool sized to the worker count.
    #[default]
    RayonPool,
}

#[derive(Debug)]
pub enum TileSchedulerError {
    RowBands(RowBandError),
    ThreadPool(ThreadPoolBuildError),
    ImageSizeMismatch {
        expected: ImageSize,
        actual: ImageSize,
    },
    Generate(GenerateFractalParallelError),
}

impl fmt::Display for TileSchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowBands(err) => write!(f, "invalid worker count: {}", err),
            Self::ThreadPool(err) => write!(f, "failed to build worker pool: {}", err),
            Self::ImageSizeMismatch { expected, actual } => write!(
                f,
                "scheduler built for {}x{} but buffer is {}x{}",
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ),
            Self::Generate(err) => write!(f, "frame generation failed: {}", err),
        }
    }
}

impl Error for TileSchedulerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RowBands(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
            Self::ImageSizeMismatch { .. } => None,
            Self::Generate(err) => Some(err),
        }
    }
}

impl From<RowBandError> for TileSchedulerError {
    fn from(err: RowBandError) -> Self {
        Self::RowBands(err)
    }
}

impl From<ThreadPoolBuildError> for TileSchedulerError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

impl From<GenerateFractalParallelError> for TileSchedulerError {
    fn from(err: GenerateFractalParallelError) -> Self {
        Self::Generate(err)
    }
}

enum Workers {
    ScopedThreads,
    RayonPool(ThreadPool),
}

/// Splits each frame into fixed row bands and fills them in parallel.
pub struct TileScheduler {
    image_size: ImageSize,
    bands: Vec<RowBand>,
    workers: Workers,
}

impl fmt::Debug for TileScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileScheduler")
            .field("image_size", &self.image_size)
            .field("bands", &self.bands.len())
            .field("strategy", &self.strategy())
            .finish()
    }
}

impl TileScheduler {
    pub fn new(
        image_size: ImageSize,
        worker_count: u32,
        strategy: SchedulerStrategy,
    ) -> Result<Self, TileSchedulerError> {
        let bands = calculate_row_bands(image_size.height(), worker_count)?;

        let workers = match strategy {
            SchedulerStrategy::ScopedThreads => Workers::ScopedThreads,
            SchedulerStrategy::RayonPool => Workers::RayonPool(
                ThreadPoolBuilder::new()
                    .num_threads(worker_count as usize)
                    .thread_name(|index| format!("julia-band-{}", index))
                    .build()?,
            ),
        };

        info!(
            "tile scheduler ready: {}x{} in {} bands using {:?}",
            image_size.width(),
            image_size.height(),
            bands.len(),
            strategy
        );

        Ok(Self {
            image_size,
            bands,
            workers,
        })
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[must_use]
    pub fn worker_count(&self) -> u32 {
        self.bands.len() as u32
    }

    #[must_use]
    pub fn strategy(&self) -> SchedulerStrategy {
        match self.workers {
            Workers::ScopedThreads => SchedulerStrategy::ScopedThreads,
            Workers::RayonPool(_) => SchedulerStrategy::RayonPool,
        }
    }

    /// Fills every pixel of `buffer` exactly once and returns after all
    /// workers have finished.
    pub fn render<Alg, CMap>(
        &self,
        buffer: &mut PixelBuffer,
        algorithm: &Alg,
        colour_map: &CMap,
    ) -> Result<(), TileSchedulerError>
    where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
    {
        if buffer.image_size() != self.image_size {
            return Err(TileSchedulerError::ImageSizeMismatch {
                expected: self.image_size,
                actual: buffer.image_size(),
            });
        }

        match &self.workers {
            Workers::ScopedThreads => generate_fractal_parallel_scoped_threads(
                buffer,
                &self.bands,
                algorithm,
                colour_map,
            )?,
            Workers::RayonPool(pool) => {
                generate_fractal_parallel_rayon(pool, buffer, &self.bands, algorithm, colour_map)?
            }
        }

        Ok(())
    }
}
