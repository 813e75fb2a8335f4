//! The set of collidable objects and the nearest-hit query

use std::rc::Rc;

use super::collision::{Collidable, CollisionInfo};
use super::line::Line;

/// Everything a ball can strike.
///
/// Owned by the session. The collection is only changed between ticks,
/// never while a query is running. Not thread-safe.
#[derive(Default)]
pub struct GameEnvironment {
    collidables: Vec<Rc<dyn Collidable>>,
}

impl GameEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_collidable(&mut self, collidable: Rc<dyn Collidable>) {
        self.collidables.push(collidable);
    }

    /// Remove by identity. Returns false if the object was not registered.
    pub fn remove_collidable(&mut self, collidable: &Rc<dyn Collidable>) -> bool {
        match self
            .collidables
            .iter()
            .position(|c| Rc::ptr_eq(c, collidable))
        {
            Some(index) => {
                self.collidables.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every collidable whose block carries `block_id`
    pub fn remove_block(&mut self, block_id: u32) -> usize {
        let before = self.collidables.len();
        self.collidables.retain(|c| c.collision_block().id != block_id);
        before - self.collidables.len()
    }

    pub fn len(&self) -> usize {
        self.collidables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collidables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn Collidable>> {
        self.collidables.iter()
    }

    /// The collision nearest to the start of `trajectory`, if any.
    ///
    /// Brute force over every object: each contributes its own nearest edge
    /// crossing, and the globally nearest wins. Ties keep the object that
    /// was registered first.
    pub fn get_closest_collision(&self, trajectory: &Line) -> Option<CollisionInfo<'_>> {
        let start = trajectory.start();
        let mut closest: Option<(f64, CollisionInfo<'_>)> = None;

        for collidable in &self.collidables {
            let rect = collidable.collision_rectangle();
            let Some(point) = trajectory.closest_intersection_to_start_of_line(&rect) else {
                continue;
            };
            let distance = start.distance(point);
            if closest.as_ref().is_none_or(|(best, _)| distance < *best) {
                closest = Some((
                    distance,
                    CollisionInfo {
                        collision_point: point,
                        collision_object: collidable.as_ref(),
                    },
                ));
            }
        }

        closest.map(|(_, info)| info)
    }
}

impl std::fmt::Debug for GameEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnvironment")
            .field(
                "block_ids",
                &self
                    .collidables
                    .iter()
                    .map(|c| c.collision_block().id)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
