//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod block;
pub mod collision;
pub mod color;
pub mod environment;
pub mod line;
pub mod listeners;
pub mod paddle;
pub mod point;
pub mod rectangle;
pub mod state;
pub mod tick;
pub mod velocity;

pub use ball::{Ball, BallState, WorldBounds};
pub use block::{Block, BlockKind};
pub use collision::{Collidable, CollisionInfo, HitListener, HitNotifier};
pub use color::{Color, palette};
pub use environment::GameEnvironment;
pub use line::{LINE_EPSILON, Line, PADDLE_ZONES};
pub use listeners::{
    BLOCK_POINTS, BallRemover, BlockRemover, Counter, EventQueue, LEVEL_CLEAR_BONUS,
    ScoreTrackingListener,
};
pub use paddle::{Paddle, PaddleTrack, ZONE_BOUNCES, ZoneBounce};
pub use point::{POINT_EPSILON, Point};
pub use rectangle::{EdgeContact, Rectangle};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, generate_level, tick};
pub use velocity::Velocity;
