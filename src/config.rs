//! Kernel configuration.
//!
//! Every field has a default, so a config file only needs the values it wants
//! to change. `validate` builds each checked value once so bad settings are
//! reported before any buffer or worker is created.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::actions::generate_fractal::tile_scheduler::SchedulerStrategy;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::image_size::{ImageSize, ImageSizeError};
use crate::core::data::vector2::Vector2;
use crate::core::fractals::julia::colour_mapping::errors::GradientError;
use crate::core::fractals::julia::colour_mapping::gradient::Gradient;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::quadratic_gradient_map::QuadraticGradientMap;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::fractals::julia::params::EscapeParams;
use crate::core::util::calculate_row_bands::{RowBandError, calculate_row_bands};
use crate::core::view::steps::{ViewSteps, ViewStepsError};
use crate::core::view::view_state::{ViewState, ViewStateError};

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(serde_json::Error),
    ImageSize(ImageSizeError),
    Escape(JuliaError),
    Steps(ViewStepsError),
    View(ViewStateError),
    Gradient(GradientError),
    Workers(RowBandError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read config {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "could not parse config: {}", err),
            Self::ImageSize(err) => write!(f, "invalid image size: {}", err),
            Self::Escape(err) => write!(f, "invalid escape parameters: {}", err),
            Self::Steps(err) => write!(f, "invalid view steps: {}", err),
            Self::View(err) => write!(f, "invalid initial view: {}", err),
            Self::Gradient(err) => write!(f, "invalid colour stops: {}", err),
            Self::Workers(err) => write!(f, "invalid worker count: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::ImageSize(err) => Some(err),
            Self::Escape(err) => Some(err),
            Self::Steps(err) => Some(err),
            Self::View(err) => Some(err),
            Self::Gradient(err) => Some(err),
            Self::Workers(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ImageSizeError> for ConfigError {
    fn from(err: ImageSizeError) -> Self {
        Self::ImageSize(err)
    }
}

impl From<JuliaError> for ConfigError {
    fn from(err: JuliaError) -> Self {
        Self::Escape(err)
    }
}

impl From<ViewStepsError> for ConfigError {
    fn from(err: ViewStepsError) -> Self {
        Self::Steps(err)
    }
}

impl From<ViewStateError> for ConfigError {
    fn from(err: ViewStateError) -> Self {
        Self::View(err)
    }
}

impl From<GradientError> for ConfigError {
    fn from(err: GradientError) -> Self {
        Self::Gradient(err)
    }
}

impl From<RowBandError> for ConfigError {
    fn from(err: RowBandError) -> Self {
        Self::Workers(err)
    }
}

/// Settings for one explorer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub width: u32,
    pub height: u32,
    /// Escape radius on `|z|`.
    pub boundary_radius: f64,
    pub max_iterations: u32,
    /// Julia parameter at start-up.
    pub initial_c: Complex,
    /// Starting zoom. `None` uses half the image height.
    pub initial_zoom: Option<f64>,
    /// Multiplier applied per frame while zooming.
    pub zoom_factor: f64,
    /// Pan distance per frame, divided by the current zoom.
    pub pan_base_offset: f64,
    /// Change to the real part of `c` per frame.
    pub c_step: f64,
    /// Number of row bands, and of pool threads for the rayon strategy.
    pub worker_count: u32,
    pub scheduler: SchedulerStrategy,
    pub colour_map: JuliaColourMapKinds,
    /// Replaces the preset's stops when set.
    pub custom_stops: Option<Vec<Colour>>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            boundary_radius: 3.0,
            max_iterations: 150,
            initial_c: Complex::new(-0.812, 0.168),
            initial_zoom: None,
            zoom_factor: 1.005,
            pan_base_offset: 500.0,
            c_step: 0.01,
            worker_count: 32,
            scheduler: SchedulerStrategy::default(),
            colour_map: JuliaColourMapKinds::default(),
            custom_stops: None,
        }
    }
}

impl KernelConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Checks every setting without allocating frame resources.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let image_size = self.image_size()?;
        self.escape_params()?;
        self.view_steps()?;
        self.initial_view()?;
        self.colour_map()?;
        calculate_row_bands(image_size.height(), self.worker_count)?;

        Ok(())
    }

    pub fn image_size(&self) -> Result<ImageSize, ConfigError> {
        Ok(ImageSize::new(self.width, self.height)?)
    }

    pub fn escape_params(&self) -> Result<EscapeParams, ConfigError> {
        Ok(EscapeParams::new(self.max_iterations, self.boundary_radius)?)
    }

    pub fn view_steps(&self) -> Result<ViewSteps, ConfigError> {
        Ok(ViewSteps::new(
            self.zoom_factor,
            self.pan_base_offset,
            self.c_step,
        )?)
    }

    pub fn initial_view(&self) -> Result<ViewState, ConfigError> {
        let zoom = self
            .initial_zoom
            .unwrap_or_else(|| f64::from(self.height / 2));

        Ok(ViewState::new(zoom, Vector2::ZERO, self.initial_c)?)
    }

    pub fn colour_map(&self) -> Result<QuadraticGradientMap, ConfigError> {
        match &self.custom_stops {
            Some(stops) => Ok(QuadraticGradientMap::new(
                Gradient::new(stops.clone())?,
                "Custom",
            )),
            None => Ok(QuadraticGradientMap::from_kind(self.colour_map)?),
        }
    }
}
