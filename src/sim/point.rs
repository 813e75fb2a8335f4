//! 2D points in screen space (y grows downward)

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tolerance used when comparing two points
pub const POINT_EPSILON: f64 = 1e-5;

/// A point on the play field.
///
/// Points are `Copy`, so every hand-off is a value copy and mutating one
/// copy never affects another.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Compare with a per-axis tolerance of [`POINT_EPSILON`]
    #[inline]
    pub fn approx_eq(&self, other: Point) -> bool {
        (self.x - other.x).abs() <= POINT_EPSILON && (self.y - other.y).abs() <= POINT_EPSILON
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Random integer-valued point inside the inclusive ranges
    pub fn random_in<R: Rng>(rng: &mut R, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        let x = rng.random_range(min_x..=max_x);
        let y = rng.random_range(min_y..=max_y);
        Self::new(x as f64, y as f64)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.as_dvec2()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
