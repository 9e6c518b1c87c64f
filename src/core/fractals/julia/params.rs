use crate::core::fractals::julia::errors::julia::JuliaError;

/// Iteration budget and escape radius for the escape-time evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeParams {
    max_iterations: u32,
    boundary_radius: f64,
}

impl EscapeParams {
    pub fn new(max_iterations: u32, boundary_radius: f64) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        if !boundary_radius.is_finite() || boundary_radius <= 0.0 {
            return Err(JuliaError::InvalidBoundaryRadius {
                radius: boundary_radius,
            });
        }

        Ok(Self {
            max_iterations,
            boundary_radius,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn boundary_radius(&self) -> f64 {
        self.boundary_radius
    }
}
