//! RGB colors
//!
//! Color is gameplay state here, not just decoration: a ball only breaks
//! blocks whose color differs from its own, and takes on the color of every
//! block it breaks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Self = Self::rgb(192, 192, 192);
    pub const ORANGE: Self = Self::rgb(255, 200, 0);
}

/// Colors for game elements
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(255, 245, 245);
    pub const BOUNDS: Color = Color::LIGHT_GRAY;
    pub const PADDLE: Color = Color::ORANGE;
    pub const BALL: Color = Color::rgb(255, 182, 193);
    pub const OUTLINE: Color = Color::BLACK;
    pub const SCORE_BAR: Color = Color::LIGHT_GRAY;
    pub const SCORE_TEXT: Color = Color::BLACK;

    /// Block colors by row, palest at the top
    pub const ROWS: [Color; 6] = [
        Color::rgb(255, 230, 240),
        Color::rgb(255, 190, 210),
        Color::rgb(255, 150, 180),
        Color::rgb(235, 110, 160),
        Color::rgb(200, 70, 130),
        Color::rgb(160, 30, 100),
    ];

    /// Row color, cycling when there are more rows than shades
    pub fn row(index: usize) -> Color {
        ROWS[index % ROWS.len()]
    }
}
