use crate::core::data::complex::Complex;

/// Smoothed escape-time count for `z ← z² + c` starting at `coord`.
///
/// Iterates while fewer than `max_iterations` steps have run and `|z|` is
/// below `boundary_radius`, then subtracts `log2(max(1, log2(|z|)))` from the
/// completed step count. The `max(1, ..)` guard keeps the correction
/// non-negative and finite when `|z|` ends below 2, including `|z| == 0`.
#[must_use]
pub fn smooth_escape_time(
    coord: Complex,
    c: Complex,
    max_iterations: u32,
    boundary_radius: f64,
) -> f64 {
    let mut z = coord;
    let mut modulus = z.magnitude();
    let mut iterations = 0;

    while iterations < max_iterations && modulus < boundary_radius {
        z = z * z + c;
        modulus = z.magnitude();
        iterations += 1;
    }

    f64::from(iterations) - modulus.log2().max(1.0).log2()
}
