use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A location or displacement on the page, in CSS pixels.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize, Default)]
pub struct Point(pub f64, pub f64);

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Point(self.0 * rhs, self.1 * rhs)
    }
}

impl Point {
    /// Euclidean length of the [`Point`] as a vector.
    pub fn length(&self) -> f64 {
        self.0.hypot(self.1)
    }
}
