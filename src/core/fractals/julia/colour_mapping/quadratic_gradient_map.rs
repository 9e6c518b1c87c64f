use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::errors::GradientError;
use crate::core::fractals::julia::colour_mapping::factory::julia_gradient_factory;
use crate::core::fractals::julia::colour_mapping::gradient::Gradient;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;

/// Colours normalized escape values through a [`Gradient`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticGradientMap {
    gradient: Gradient,
    display_name: String,
}

impl ColourMap<f64> for QuadraticGradientMap {
    fn map(&self, value: f64) -> Colour {
        self.gradient.colour_at(value)
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl QuadraticGradientMap {
    #[must_use]
    pub fn new(gradient: Gradient, display_name: impl Into<String>) -> Self {
        Self {
            gradient,
            display_name: display_name.into(),
        }
    }

    pub fn from_kind(kind: JuliaColourMapKinds) -> Result<Self, GradientError> {
        Ok(Self::new(julia_gradient_factory(kind)?, kind.display_name()))
    }

    #[must_use]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}
