use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::errors::GradientError;
use crate::core::fractals::julia::colour_mapping::gradient::Gradient;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;

const DUSK_STOPS: [Colour; 3] = [
    Colour::new(10, 10, 10),
    Colour::new(0, 0, 100),
    Colour::new(255, 150, 150),
];

const BLUE_WHITE_STOPS: [Colour; 3] = [
    Colour::new(0, 0, 0),
    Colour::new(0, 40, 140),
    Colour::new(255, 255, 255),
];

const FIRE_STOPS: [Colour; 4] = [
    Colour::new(0, 0, 0),
    Colour::new(180, 20, 0),
    Colour::new(255, 165, 0),
    Colour::new(255, 255, 200),
];

pub fn julia_gradient_factory(kind: JuliaColourMapKinds) -> Result<Gradient, GradientError> {
    let stops: &[Colour] = match kind {
        JuliaColourMapKinds::Dusk => &DUSK_STOPS,
        JuliaColourMapKinds::BlueWhiteGradient => &BLUE_WHITE_STOPS,
        JuliaColourMapKinds::FireGradient => &FIRE_STOPS,
    };

    Gradient::new(stops.to_vec())
}
