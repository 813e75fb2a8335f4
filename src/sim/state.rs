//! Game session state
//!
//! The session is the single owner of the environment. Balls borrow it for
//! the length of one step; listeners queue structural changes that are
//! applied once every ball has moved.

use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::block::{Block, BlockKind};
use super::color::{Color, palette};
use super::environment::GameEnvironment;
use super::listeners::{BallRemover, BlockRemover, Counter, EventQueue, ScoreTrackingListener};
use super::paddle::{Paddle, PaddleTrack};
use super::point::Point;
use super::rectangle::Rectangle;
use super::velocity::Velocity;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Every block was broken
    Won,
    /// Every ball left through the exit zone
    Lost,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BlockRemoved { block_id: u32, ball_id: u32 },
    BallExited { ball_id: u32, exit_id: u32 },
    LevelCleared,
    AllBallsLost,
}

/// Complete session state
#[derive(Debug)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub environment: GameEnvironment,
    /// Drawn first, never collides
    pub background: Option<Block>,
    /// Drawable blocks in insertion order (bounds, bricks, exit zone)
    pub blocks: Vec<Rc<Block>>,
    pub paddle: Option<Rc<Paddle>>,
    /// Active balls in spawn order
    pub balls: Vec<Ball>,
    /// Events applied by the most recent tick
    pub last_events: Vec<GameEvent>,
    pub rng: Pcg32,
    events: Rc<EventQueue>,
    block_remover: Rc<BlockRemover>,
    ball_remover: Rc<BallRemover>,
    score_tracker: Rc<ScoreTrackingListener>,
    blocks_added: u32,
    balls_spawned: u32,
    next_id: u32,
}

impl GameState {
    /// Create a session with the standard level
    pub fn new(settings: Settings) -> Self {
        let mut state = Self::empty(settings);
        super::tick::generate_level(&mut state);
        state
    }

    /// Create a session with nothing in it
    pub fn empty(settings: Settings) -> Self {
        let events = Rc::new(EventQueue::new());
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self {
            block_remover: Rc::new(BlockRemover::new(events.clone(), Rc::new(Counter::new()))),
            ball_remover: Rc::new(BallRemover::new(events.clone(), Rc::new(Counter::new()))),
            score_tracker: Rc::new(ScoreTrackingListener::new(Rc::new(Counter::new()))),
            events,
            settings,
            phase: GamePhase::Playing,
            time_ticks: 0,
            environment: GameEnvironment::new(),
            background: None,
            blocks: Vec::new(),
            paddle: None,
            balls: Vec::new(),
            last_events: Vec::new(),
            rng,
            blocks_added: 0,
            balls_spawned: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn remaining_blocks(&self) -> i64 {
        self.block_remover.remaining_blocks().value()
    }

    pub fn remaining_balls(&self) -> i64 {
        self.ball_remover.remaining_balls().value()
    }

    pub fn score(&self) -> i64 {
        self.score_tracker.score().value()
    }

    pub fn score_counter(&self) -> Rc<Counter> {
        self.score_tracker.score().clone()
    }

    pub fn score_tracker(&self) -> &ScoreTrackingListener {
        &self.score_tracker
    }

    pub fn set_background(&mut self, rect: Rectangle, color: Color) {
        let id = self.next_entity_id();
        self.background = Some(Block::new(id, rect, color));
    }

    /// Add a breakable block that counts toward clearing the level
    pub fn add_block(&mut self, rect: Rectangle, color: Color) -> Rc<Block> {
        let id = self.next_entity_id();
        let block = Rc::new(Block::new(id, rect, color));
        block.add_hit_listener(self.block_remover.clone());
        block.add_hit_listener(self.score_tracker.clone());
        self.block_remover.remaining_blocks().increase(1);
        self.blocks_added += 1;
        self.register(block.clone());
        block
    }

    /// Add an unbreakable wall or exit zone
    pub fn add_boundary(&mut self, rect: Rectangle, color: Color, kind: BlockKind) -> Rc<Block> {
        let id = self.next_entity_id();
        let block = Rc::new(Block::with_kind(id, rect, color, kind));
        self.register(block.clone());
        block
    }

    /// Place the paddle, replacing any previous one
    pub fn set_paddle(&mut self, rect: Rectangle, color: Color) -> Rc<Paddle> {
        if let Some(old) = self.paddle.take() {
            self.environment.remove_block(old.block().id);
        }
        let id = self.next_entity_id();
        let track = PaddleTrack {
            gui_width: self.settings.gui_width,
            bounds_width: self.settings.bounds_width,
            speed: self.settings.paddle_speed,
        };
        let paddle = Rc::new(Paddle::new(Block::new(id, rect, color), track));
        self.environment.add_collidable(paddle.clone());
        self.paddle = Some(paddle.clone());
        paddle
    }

    /// Spawn an active ball wired to the ball remover. Returns its ID.
    pub fn spawn_ball(&mut self, center: Point, velocity: Velocity) -> u32 {
        let id = self.next_entity_id();
        let mut ball = Ball::new(id, center, self.settings.ball_radius, palette::BALL, velocity);
        ball.set_world_bounds(self.settings.world_bounds());
        ball.attach();
        ball.add_hit_listener(self.ball_remover.clone());
        self.ball_remover.remaining_balls().increase(1);
        self.balls_spawned += 1;
        self.balls.push(ball);
        id
    }

    pub fn ball(&self, id: u32) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn block(&self, id: u32) -> Option<&Rc<Block>> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Apply queued removals. Runs between ticks only.
    pub fn apply_events(&mut self) {
        let events = self.events.drain();
        for event in &events {
            match *event {
                GameEvent::BlockRemoved { block_id, ball_id } => {
                    self.environment.remove_block(block_id);
                    self.blocks.retain(|b| b.id != block_id);
                    log::info!(
                        "Block {} broken by ball {} ({} left)",
                        block_id,
                        ball_id,
                        self.remaining_blocks()
                    );
                }
                GameEvent::BallExited { ball_id, .. } => {
                    log::info!("Ball {} left play ({} left)", ball_id, self.remaining_balls());
                }
                GameEvent::LevelCleared | GameEvent::AllBallsLost => {}
            }
        }
        self.balls.retain(|b| !b.is_removed());
        self.last_events = events;
    }

    /// Decide win/loss from the counters. A counter only decides once
    /// something was added to it, so a scene without blocks or balls keeps
    /// playing.
    pub fn update_phase(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.blocks_added > 0 && self.remaining_blocks() <= 0 {
            self.score_tracker.level_cleared();
            self.phase = GamePhase::Won;
            self.last_events.push(GameEvent::LevelCleared);
            log::info!("Level cleared at tick {}. {}", self.time_ticks, self.score_tracker);
        } else if self.balls_spawned > 0 && self.remaining_balls() <= 0 {
            self.phase = GamePhase::Lost;
            self.last_events.push(GameEvent::AllBallsLost);
            log::info!("All balls lost at tick {}. {}", self.time_ticks, self.score_tracker);
        }
    }

    fn register(&mut self, block: Rc<Block>) {
        self.environment.add_collidable(block.clone());
        self.blocks.push(block);
    }
}
