//! Rectangular blocks: bricks, world bounds and the exit zone

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{Collidable, HitListener, HitNotifier};
use super::color::Color;
use super::point::Point;
use super::rectangle::Rectangle;
use super::velocity::Velocity;

/// Block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    /// Ordinary block: reflects the ball
    #[default]
    Solid,
    /// Marks the edge of the world. Striking it means the ball has left
    /// play; it still reflects like a solid block.
    ExitZone,
}

/// A block entity
#[derive(Debug)]
pub struct Block {
    pub id: u32,
    pub kind: BlockKind,
    pub color: Color,
    rectangle: Cell<Rectangle>,
    hit_listeners: HitNotifier,
}

impl Block {
    pub fn new(id: u32, rectangle: Rectangle, color: Color) -> Self {
        Self::with_kind(id, rectangle, color, BlockKind::Solid)
    }

    pub fn with_kind(id: u32, rectangle: Rectangle, color: Color, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            color,
            rectangle: Cell::new(rectangle),
            hit_listeners: HitNotifier::new(),
        }
    }

    pub fn exit_zone(id: u32, rectangle: Rectangle, color: Color) -> Self {
        Self::with_kind(id, rectangle, color, BlockKind::ExitZone)
    }

    #[inline]
    pub fn rectangle(&self) -> Rectangle {
        self.rectangle.get()
    }

    /// Relocate the block (used by the paddle)
    pub fn set_upper_left(&self, upper_left: Point) {
        let mut rect = self.rectangle.get();
        rect.set_upper_left(upper_left);
        self.rectangle.set(rect);
    }

    pub fn is_exit_zone(&self) -> bool {
        self.kind == BlockKind::ExitZone
    }

    pub fn ball_color_match(&self, ball: &Ball) -> bool {
        self.color == ball.color()
    }

    pub fn add_hit_listener(&self, listener: Rc<dyn HitListener>) {
        self.hit_listeners.add_hit_listener(listener);
    }

    pub fn remove_hit_listener(&self, listener: &Rc<dyn HitListener>) -> bool {
        self.hit_listeners.remove_hit_listener(listener)
    }

    pub fn clear_hit_listeners(&self) {
        self.hit_listeners.clear();
    }

    pub fn hit_listener_count(&self) -> usize {
        self.hit_listeners.len()
    }

    pub fn notify_hit(&self, hitter: &Ball) {
        self.hit_listeners.notify(self, hitter);
    }
}

impl Collidable for Block {
    fn collision_rectangle(&self) -> Rectangle {
        self.rectangle()
    }

    fn collision_block(&self) -> &Block {
        self
    }

    /// Mirror the velocity off the struck edge: top/bottom flips `dy`,
    /// left/right flips `dx`, a corner flips both.
    ///
    /// Listeners hear about the hit only when the ball's color differs from
    /// the block's.
    ///
    /// # Panics
    ///
    /// Panics if the collision point or velocity is not finite.
    fn hit(&self, hitter: &Ball, collision_point: Point, current_velocity: Velocity) -> Velocity {
        assert!(
            collision_point.is_finite() && current_velocity.is_finite(),
            "block {} hit with invalid point {:?} or velocity {:?}",
            self.id,
            collision_point,
            current_velocity
        );

        let contact = self.rectangle().edge_contact(collision_point);
        let mut velocity = current_velocity;
        if contact.horizontal {
            velocity.dy = -velocity.dy;
        }
        if contact.vertical {
            velocity.dx = -velocity.dx;
        }

        if !self.ball_color_match(hitter) {
            self.notify_hit(hitter);
        }

        velocity
    }
}
