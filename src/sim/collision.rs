//! Collision capability and hit notification
//!
//! Anything a ball can strike implements [`Collidable`]. Hit events are
//! broadcast through a [`HitNotifier`], which snapshots its listener list
//! before every broadcast so a listener may detach itself (or any other
//! listener) mid-notification.
//!
//! The simulation is single-threaded: notifiers use `RefCell` and listeners
//! are shared through `Rc`, so none of these types are `Send`.

use std::cell::RefCell;
use std::rc::Rc;

use super::ball::Ball;
use super::block::Block;
use super::point::Point;
use super::rectangle::Rectangle;
use super::velocity::Velocity;

/// An object that can be struck by a ball
pub trait Collidable {
    /// Rectangle used for collision testing (by value; a snapshot)
    fn collision_rectangle(&self) -> Rectangle;

    /// The block that carries this object's color, kind and listeners
    fn collision_block(&self) -> &Block;

    /// Resolve a strike at `collision_point` and return the hitter's new
    /// velocity.
    fn hit(&self, hitter: &Ball, collision_point: Point, current_velocity: Velocity) -> Velocity;
}

/// One candidate collision: where, and with what
#[derive(Clone, Copy)]
pub struct CollisionInfo<'a> {
    pub collision_point: Point,
    pub collision_object: &'a dyn Collidable,
}

impl std::fmt::Debug for CollisionInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionInfo")
            .field("collision_point", &self.collision_point)
            .field("block_id", &self.collision_object.collision_block().id)
            .finish()
    }
}

/// Receives hit events: the struck block and the ball that hit it
pub trait HitListener {
    fn hit_event(&self, being_hit: &Block, hitter: &Ball);
}

/// Registry of hit listeners owned by an emitting entity
#[derive(Default)]
pub struct HitNotifier {
    listeners: RefCell<Vec<Rc<dyn HitListener>>>,
}

impl HitNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hit_listener(&self, listener: Rc<dyn HitListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Remove a listener by identity. Returns false if it was not registered.
    pub fn remove_hit_listener(&self, listener: &Rc<dyn HitListener>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|l| Rc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Broadcast to the listeners registered at the moment of the call
    pub fn notify(&self, being_hit: &Block, hitter: &Ball) {
        let snapshot: Vec<Rc<dyn HitListener>> = self.listeners.borrow().clone();
        for listener in &snapshot {
            listener.hit_event(being_hit, hitter);
        }
    }
}

impl std::fmt::Debug for HitNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitNotifier")
            .field("listeners", &self.len())
            .finish()
    }
}
