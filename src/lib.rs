//! Arkanoid - A brick-breaker with continuous collision detection
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state)
//! - `renderer`: Draw-surface interface and sprites
//! - `settings`: World configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const GUI_WIDTH: f64 = 800.0;
    pub const GUI_HEIGHT: f64 = 600.0;
    /// Wall thickness (left/right and top)
    pub const BOUNDS_WIDTH: f64 = 10.0;
    pub const BOUNDS_HEIGHT: f64 = 10.0;
    pub const SCORE_BAR_HEIGHT: f64 = 20.0;

    /// Block grid
    pub const BLOCK_ROWS: u32 = 6;
    pub const BLOCK_WIDTH: f64 = 50.0;
    pub const BLOCK_HEIGHT: f64 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 80.0;
    pub const PADDLE_HEIGHT: f64 = 7.0;
    pub const PADDLE_SPEED: f64 = 8.0;

    /// Ball defaults
    pub const BALL_COUNT: u32 = 3;
    pub const BALL_RADIUS: f64 = 8.0;

    pub const FRAMES_PER_SECOND: u32 = 60;
    pub const DEFAULT_SEED: u64 = 12345;
    /// Headless tick cap (five minutes at 60 fps)
    pub const MAX_TICKS: u64 = 18_000;
}
