//! The player's paddle
//!
//! The paddle's top edge is split into five equal zones. A falling ball that
//! lands on it leaves at a fixed angle picked by the zone, which gives the
//! player aim control.

use super::ball::Ball;
use super::block::Block;
use super::collision::Collidable;
use super::line::PADDLE_ZONES;
use super::point::Point;
use super::rectangle::Rectangle;
use super::velocity::Velocity;

/// Bounce rule for each paddle zone, left to right
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneBounce {
    /// Leave at this angle (degrees, 0° = up, clockwise), keeping speed
    Angle(f64),
    /// Mirror `dy` only
    Mirror,
}

pub const ZONE_BOUNCES: [ZoneBounce; PADDLE_ZONES] = [
    ZoneBounce::Angle(300.0),
    ZoneBounce::Angle(330.0),
    ZoneBounce::Mirror,
    ZoneBounce::Angle(30.0),
    ZoneBounce::Angle(60.0),
];

/// Horizontal limits the paddle moves within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleTrack {
    pub gui_width: f64,
    pub bounds_width: f64,
    /// Pixels moved per tick while a direction is held
    pub speed: f64,
}

#[derive(Debug)]
pub struct Paddle {
    block: Block,
    track: PaddleTrack,
}

impl Paddle {
    pub fn new(block: Block, track: PaddleTrack) -> Self {
        Self { block, track }
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn rectangle(&self) -> Rectangle {
        self.block.rectangle()
    }

    pub fn center_x(&self) -> f64 {
        self.rectangle().center().x
    }

    /// Move left; past the left edge the paddle wraps to the right wall
    pub fn move_left(&self) {
        let rect = self.rectangle();
        let upper_left = rect.upper_left();
        let x = if upper_left.x > 0.0 {
            upper_left.x - self.track.speed
        } else {
            self.track.gui_width - self.track.bounds_width - rect.width()
        };
        self.block.set_upper_left(Point::new(x, upper_left.y));
    }

    /// Move right; past the right edge the paddle wraps to x = 0
    pub fn move_right(&self) {
        let rect = self.rectangle();
        let upper_left = rect.upper_left();
        let x = if upper_left.x + rect.width() < self.track.gui_width {
            upper_left.x + self.track.speed
        } else {
            0.0
        };
        self.block.set_upper_left(Point::new(x, upper_left.y));
    }

    /// Index of the top-edge zone containing `p`, leftmost match first
    pub fn zone_of(&self, p: Point) -> Option<usize> {
        self.rectangle()
            .top_line()
            .divide_to_5()
            .iter()
            .position(|zone| zone.is_on_line(p))
    }
}

impl Collidable for Paddle {
    fn collision_rectangle(&self) -> Rectangle {
        self.rectangle()
    }

    fn collision_block(&self) -> &Block {
        &self.block
    }

    fn hit(&self, _hitter: &Ball, collision_point: Point, current_velocity: Velocity) -> Velocity {
        let rect = self.rectangle();

        if rect.top_line().is_on_line(collision_point) && current_velocity.dy > 0.0 {
            let Some(zone) = self.zone_of(collision_point) else {
                return current_velocity;
            };
            return match ZONE_BOUNCES[zone] {
                ZoneBounce::Angle(angle) => {
                    Velocity::from_angle_and_speed(angle, current_velocity.speed())
                }
                ZoneBounce::Mirror => Velocity::new(current_velocity.dx, -current_velocity.dy),
            };
        }

        if rect.left_line().is_on_line(collision_point)
            || rect.right_line().is_on_line(collision_point)
        {
            return Velocity::new(-current_velocity.dx, current_velocity.dy);
        }

        current_velocity
    }
}
