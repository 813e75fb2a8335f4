//! Hit listeners that keep score and retire blocks and balls
//!
//! Listeners run inside a ball's step, so they never touch the environment
//! directly. Structural changes are queued as [`GameEvent`]s and applied by
//! the session once every ball has moved.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::ball::Ball;
use super::block::Block;
use super::collision::HitListener;
use super::state::GameEvent;

/// Points for breaking a block
pub const BLOCK_POINTS: i64 = 5;
/// Bonus for clearing every block
pub const LEVEL_CLEAR_BONUS: i64 = 100;

/// Shared integer counter
#[derive(Debug, Default)]
pub struct Counter {
    count: Cell<i64>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increase(&self, by: i64) {
        self.count.set(self.count.get() + by);
    }

    pub fn decrease(&self, by: i64) {
        self.count.set(self.count.get() - by);
    }

    pub fn value(&self) -> i64 {
        self.count.get()
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Events produced during a tick, drained by the session afterwards
#[derive(Debug, Default)]
pub struct EventQueue {
    events: RefCell<Vec<GameEvent>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

/// Breaks blocks: recolors the ball, detaches the block's listeners and
/// queues the block for removal
#[derive(Debug)]
pub struct BlockRemover {
    events: Rc<EventQueue>,
    remaining_blocks: Rc<Counter>,
}

impl BlockRemover {
    pub fn new(events: Rc<EventQueue>, remaining_blocks: Rc<Counter>) -> Self {
        Self {
            events,
            remaining_blocks,
        }
    }

    pub fn remaining_blocks(&self) -> &Rc<Counter> {
        &self.remaining_blocks
    }
}

impl HitListener for BlockRemover {
    fn hit_event(&self, being_hit: &Block, hitter: &Ball) {
        hitter.set_color(being_hit.color);
        being_hit.clear_hit_listeners();
        self.remaining_blocks.decrease(1);
        self.events.push(GameEvent::BlockRemoved {
            block_id: being_hit.id,
            ball_id: hitter.id,
        });
    }
}

/// Retires balls that reach an exit zone
#[derive(Debug)]
pub struct BallRemover {
    events: Rc<EventQueue>,
    remaining_balls: Rc<Counter>,
}

impl BallRemover {
    pub fn new(events: Rc<EventQueue>, remaining_balls: Rc<Counter>) -> Self {
        Self {
            events,
            remaining_balls,
        }
    }

    pub fn remaining_balls(&self) -> &Rc<Counter> {
        &self.remaining_balls
    }
}

impl HitListener for BallRemover {
    fn hit_event(&self, being_hit: &Block, hitter: &Ball) {
        if !being_hit.is_exit_zone() || hitter.is_removed() {
            return;
        }
        hitter.remove_from_game();
        self.remaining_balls.decrease(1);
        self.events.push(GameEvent::BallExited {
            ball_id: hitter.id,
            exit_id: being_hit.id,
        });
    }
}

/// Adds points for every block hit
#[derive(Debug)]
pub struct ScoreTrackingListener {
    score: Rc<Counter>,
}

impl ScoreTrackingListener {
    pub fn new(score: Rc<Counter>) -> Self {
        Self { score }
    }

    pub fn score(&self) -> &Rc<Counter> {
        &self.score
    }

    pub fn level_cleared(&self) {
        self.score.increase(LEVEL_CLEAR_BONUS);
    }
}

impl HitListener for ScoreTrackingListener {
    fn hit_event(&self, being_hit: &Block, _hitter: &Ball) {
        if !being_hit.is_exit_zone() {
            self.score.increase(BLOCK_POINTS);
        }
    }
}

impl std::fmt::Display for ScoreTrackingListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score: {}", self.score)
    }
}
