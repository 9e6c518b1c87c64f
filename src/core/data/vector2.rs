use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// Screen-space offset of the view centre, measured in pixels at zoom 1.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assign() {
        let mut v = Vector2::new(1.0, -2.0);
        v += Vector2::new(0.5, 4.0);

        assert_eq!(v, Vector2::new(1.5, 2.0));
    }

    #[test]
    fn test_scale() {
        assert_eq!(Vector2::new(-1.0, 0.0) * 250.0, Vector2::new(-250.0, 0.0));
    }
}
