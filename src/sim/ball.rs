//! The ball: per-tick stepping against the environment

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::collision::{HitListener, HitNotifier};
use super::color::Color;
use super::environment::GameEnvironment;
use super::line::Line;
use super::point::Point;
use super::velocity::Velocity;

/// Ball lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallState {
    /// Not yet attached to an environment; stepping is a no-op
    #[default]
    Detached,
    /// Participates in stepping
    Active,
    /// Left the world through an exit zone. Terminal.
    Removed,
}

/// Hard world boundaries checked after every step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub gui_width: f64,
    pub gui_height: f64,
    /// Thickness of the left and right walls
    pub bounds_width: f64,
    /// Thickness of the top wall
    pub bounds_height: f64,
}

/// A ball entity
#[derive(Debug)]
pub struct Ball {
    pub id: u32,
    center: Point,
    radius: f64,
    color: Cell<Color>,
    velocity: Velocity,
    state: Cell<BallState>,
    bounds: Option<WorldBounds>,
    hit_listeners: HitNotifier,
}

impl Ball {
    pub fn new(id: u32, center: Point, radius: f64, color: Color, velocity: Velocity) -> Self {
        Self {
            id,
            center,
            radius,
            color: Cell::new(color),
            velocity,
            state: Cell::new(BallState::Detached),
            bounds: None,
            hit_listeners: HitNotifier::new(),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color.get()
    }

    pub fn set_color(&self, color: Color) {
        self.color.set(color);
    }

    #[inline]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn state(&self) -> BallState {
        self.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.state.get() == BallState::Active
    }

    pub fn is_removed(&self) -> bool {
        self.state.get() == BallState::Removed
    }

    /// Join the session's environment. A removed ball stays removed.
    pub fn attach(&self) {
        if self.state.get() == BallState::Detached {
            self.state.set(BallState::Active);
        }
    }

    /// Leave play for good and drop every listener
    pub fn remove_from_game(&self) {
        self.state.set(BallState::Removed);
        self.hit_listeners.clear();
    }

    /// Configure the hard walls. Ignored unless both GUI dimensions are
    /// positive.
    pub fn set_boundaries(
        &mut self,
        gui_width: f64,
        gui_height: f64,
        bounds_width: f64,
        bounds_height: f64,
    ) {
        self.bounds = (gui_width > 0.0 && gui_height > 0.0).then_some(WorldBounds {
            gui_width,
            gui_height,
            bounds_width,
            bounds_height,
        });
    }

    pub fn set_world_bounds(&mut self, bounds: Option<WorldBounds>) {
        match bounds {
            Some(b) => {
                self.set_boundaries(b.gui_width, b.gui_height, b.bounds_width, b.bounds_height)
            }
            None => self.bounds = None,
        }
    }

    pub fn world_bounds(&self) -> Option<WorldBounds> {
        self.bounds
    }

    pub fn add_hit_listener(&self, listener: Rc<dyn HitListener>) {
        self.hit_listeners.add_hit_listener(listener);
    }

    pub fn remove_hit_listener(&self, listener: &Rc<dyn HitListener>) -> bool {
        self.hit_listeners.remove_hit_listener(listener)
    }

    pub fn hit_listener_count(&self) -> usize {
        self.hit_listeners.len()
    }

    /// Advance one tick.
    ///
    /// The trajectory is the center's full displacement for the tick, not a
    /// sub-step, and the radius is not swept along it. High speeds can carry
    /// the ball's edge into or past thin objects.
    pub fn move_one_step(&mut self, environment: &GameEnvironment) {
        if !self.is_active() {
            return;
        }
        self.advance(environment, self.velocity);
        self.check_boundary_collision();
    }

    /// Advance one tick in `substeps` equal slices, testing collisions for
    /// each slice. `substeps <= 1` is exactly [`Ball::move_one_step`].
    pub fn move_substepped(&mut self, environment: &GameEnvironment, substeps: u32) {
        if substeps <= 1 {
            self.move_one_step(environment);
            return;
        }
        if !self.is_active() {
            return;
        }

        let fraction = 1.0 / substeps as f64;
        for _ in 0..substeps {
            self.advance(environment, self.velocity.scaled(fraction));
            if !self.is_active() {
                break;
            }
        }
        self.check_boundary_collision();
    }

    /// Frame hook for the orchestration layer
    pub fn time_passed(&mut self, environment: &GameEnvironment) {
        self.move_one_step(environment);
    }

    /// Move along `displacement`, resolving at most one collision
    fn advance(&mut self, environment: &GameEnvironment, displacement: Velocity) {
        let trajectory = Line::new(self.center, displacement.apply_to_point(self.center));

        let Some(info) = environment.get_closest_collision(&trajectory) else {
            self.center = trajectory.end();
            return;
        };

        let struck = info.collision_object;
        let block = struck.collision_block();
        if block.is_exit_zone() {
            log::debug!("ball {} reached exit zone {}", self.id, block.id);
            self.notify_exit(block);
        }

        let new_velocity = struck.hit(self, info.collision_point, self.velocity);
        log::debug!(
            "ball {} hit block {} at {}: {} -> {}",
            self.id,
            block.id,
            info.collision_point,
            self.velocity,
            new_velocity
        );

        self.center = self.move_to_collision(info.collision_point, self.velocity);
        self.velocity = new_velocity;
    }

    /// Place the center at `collision_point`, backed off by one radius on
    /// each axis against the direction of travel
    pub fn move_to_collision(&self, collision_point: Point, velocity: Velocity) -> Point {
        let back_off = |component: f64| {
            if component < 0.0 {
                self.radius
            } else if component > 0.0 {
                -self.radius
            } else {
                0.0
            }
        };
        Point::new(
            collision_point.x + back_off(velocity.dx),
            collision_point.y + back_off(velocity.dy),
        )
    }

    /// Reflect off the top, right and left walls and clamp the center inside
    /// them. The bottom is handled by the exit zone, not here.
    pub fn check_boundary_collision(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let r = self.radius;

        if self.center.y - r <= bounds.bounds_height {
            self.velocity.dy = -self.velocity.dy;
            self.center.y = r + bounds.bounds_height;
        }
        if self.center.x + r + bounds.bounds_width >= bounds.gui_width {
            self.velocity.dx = -self.velocity.dx;
            self.center.x = bounds.gui_width - r - bounds.bounds_width;
        }
        if self.center.x - r <= bounds.bounds_width {
            self.velocity.dx = -self.velocity.dx;
            self.center.x = r + bounds.bounds_width;
        }
    }

    fn notify_exit(&self, exit: &Block) {
        self.hit_listeners.notify(exit, self);
    }
}
