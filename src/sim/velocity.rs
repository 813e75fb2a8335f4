//! Per-tick velocity vectors
//!
//! Angles follow the screen convention used throughout the game: 0° points
//! up (negative y) and angles grow clockwise, so 90° is to the right and
//! 180° is straight down.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::point::Point;

/// Displacement applied to a body every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build a velocity from an angle (degrees, 0° = up, clockwise) and speed
    pub fn from_angle_and_speed(angle: f64, speed: f64) -> Self {
        let dir = DVec2::from_angle((angle - 90.0).to_radians());
        (dir * speed).into()
    }

    /// Random launch velocity: angle in [0°, 180°), integer speed in [4, 8]
    ///
    /// Every angle in that range has a non-negative horizontal component.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let angle = 180.0 * rng.random::<f64>();
        let speed = rng.random_range(4..=8) as f64;
        Self::from_angle_and_speed(angle, speed)
    }

    /// Length of the vector
    #[inline]
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    /// Angle in degrees, in [0, 360), using the same convention as
    /// [`Velocity::from_angle_and_speed`]
    pub fn angle(&self) -> f64 {
        (self.dy.atan2(self.dx).to_degrees() + 90.0).rem_euclid(360.0)
    }

    /// Move a point by one tick of this velocity
    #[inline]
    pub fn apply_to_point(&self, p: Point) -> Point {
        Point::new(p.x + self.dx, p.y + self.dy)
    }

    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.dx * factor, self.dy * factor)
    }

    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.dx, self.dy)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl std::fmt::Display for Velocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "speed {:.3} angle {:.1}", self.speed(), self.angle())
    }
}
