pub mod errors;
pub mod factory;
pub mod gradient;
pub mod kinds;
pub mod quadratic_gradient_map;
