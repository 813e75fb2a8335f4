//! World configuration
//!
//! Every dimension the level builder and the ball's boundary check read.
//! Loaded from a JSON file; missing fields take their defaults.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::WorldBounds;

/// Error loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "failed to parse settings: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub gui_width: f64,
    pub gui_height: f64,
    /// Thickness of the left and right walls
    pub bounds_width: f64,
    /// Thickness of the top wall
    pub bounds_height: f64,
    pub score_bar_height: f64,

    // === Level ===
    pub block_rows: u32,
    pub block_width: f64,
    pub block_height: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    /// Pixels per tick
    pub paddle_speed: f64,
    pub ball_count: u32,
    pub ball_radius: f64,

    // === Simulation ===
    pub frames_per_second: u32,
    pub seed: u64,
    /// Collision slices per tick. 1 keeps the classic one-segment step.
    pub substeps: u32,
    /// Clamp balls inside the walls after every step
    pub enforce_world_bounds: bool,
    /// Headless runs stop after this many ticks
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gui_width: GUI_WIDTH,
            gui_height: GUI_HEIGHT,
            bounds_width: BOUNDS_WIDTH,
            bounds_height: BOUNDS_HEIGHT,
            score_bar_height: SCORE_BAR_HEIGHT,

            block_rows: BLOCK_ROWS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_count: BALL_COUNT,
            ball_radius: BALL_RADIUS,

            frames_per_second: FRAMES_PER_SECOND,
            seed: DEFAULT_SEED,
            substeps: 1,
            enforce_world_bounds: true,
            max_ticks: MAX_TICKS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("gui_width", self.gui_width),
            ("gui_height", self.gui_height),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("bounds_width", self.bounds_width),
            ("bounds_height", self.bounds_height),
            ("score_bar_height", self.score_bar_height),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must not be negative",
                });
            }
        }

        let counts = [
            ("block_rows", self.block_rows),
            ("ball_count", self.ball_count),
            ("substeps", self.substeps),
            ("frames_per_second", self.frames_per_second),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be at least 1",
                });
            }
        }

        if self.paddle_width > self.gui_width - 2.0 * self.bounds_width {
            return Err(SettingsError::Invalid {
                field: "paddle_width",
                reason: "paddle does not fit between the walls",
            });
        }

        let (xs, ys) = self.ball_spawn_area();
        if xs.is_empty() {
            return Err(SettingsError::Invalid {
                field: "ball_radius",
                reason: "ball does not fit between the walls",
            });
        }
        if ys.is_empty() {
            return Err(SettingsError::Invalid {
                field: "block_rows",
                reason: "no room to spawn balls between the blocks and the paddle",
            });
        }
        Ok(())
    }

    /// Whole-pixel ranges for ball centers: between the walls, under the
    /// lowest block row, above the paddle
    pub fn ball_spawn_area(&self) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
        let r = self.ball_radius;
        let min_x = (self.bounds_width + r) as i32;
        let max_x = (self.gui_width - self.bounds_width - r) as i32;
        let min_y =
            (self.bounds_height + r + (self.block_rows as f64 + 3.0) * self.block_height) as i32;
        let max_y = (self.gui_height - self.bounds_height - r - self.paddle_height) as i32;
        (min_x..=max_x, min_y..=max_y)
    }

    /// Bounds for the ball's wall check, if enabled
    pub fn world_bounds(&self) -> Option<WorldBounds> {
        self.enforce_world_bounds.then_some(WorldBounds {
            gui_width: self.gui_width,
            gui_height: self.gui_height,
            bounds_width: self.bounds_width,
            bounds_height: self.bounds_height,
        })
    }
}
