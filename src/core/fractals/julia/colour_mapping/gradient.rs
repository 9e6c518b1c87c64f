use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::errors::GradientError;

/// Ordered colour ramp with at least two stops.
///
/// Stops are spread evenly over `[0, 1]`. Neighbouring stops are blended
/// with the quadratic mean of their channels, which keeps the transition
/// brighter than a linear blend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    stops: Vec<Colour>,
}

impl Gradient {
    pub fn new(stops: Vec<Colour>) -> Result<Self, GradientError> {
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops { stops: stops.len() });
        }

        Ok(Self { stops })
    }

    #[must_use]
    pub fn stops(&self) -> &[Colour] {
        &self.stops
    }

    /// Maps a normalized position to a colour.
    ///
    /// Positions outside `[0, 1]` are clamped and NaN is treated as 0.
    #[must_use]
    pub fn colour_at(&self, position: f64) -> Colour {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };

        let segments = self.stops.len() - 1;
        let interval = 1.0 / segments as f64;
        let lower_bound = ((position * segments as f64).floor() as usize).min(segments - 1);
        let t = ((position - interval * lower_bound as f64) / interval).clamp(0.0, 1.0);

        blend_colours(self.stops[lower_bound], self.stops[lower_bound + 1], t)
    }
}

fn blend_colours(colour1: Colour, colour2: Colour, t: f64) -> Colour {
    Colour {
        r: blend_channel(colour1.r, colour2.r, t),
        g: blend_channel(colour1.g, colour2.g, t),
        b: blend_channel(colour1.b, colour2.b, t),
    }
}

fn blend_channel(channel1: u8, channel2: u8, t: f64) -> u8 {
    let channel1 = f64::from(channel1);
    let channel2 = f64::from(channel2);
    let blended = ((1.0 - t) * channel1 * channel1 + t * channel2 * channel2).sqrt();

    debug_assert!(blended <= 255.0, "blended channel {} exceeds 255", blended);

    blended.clamp(0.0, 255.0) as u8
}
