//! Rendering interface
//!
//! The simulation draws onto any [`DrawSurface`]. No window or GPU backend
//! lives here; [`CommandRecorder`] records the calls for headless runs and
//! tests.

pub mod shapes;

pub use shapes::ScoreIndicator;

use crate::sim::{Color, GameState};

/// A 2D surface with a current pen colour. Coordinates are whole pixels.
pub trait DrawSurface {
    fn set_color(&mut self, color: Color);
    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn fill_circle(&mut self, x: i32, y: i32, radius: i32);
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, font_size: i32);
    fn width(&self) -> i32;
    fn height(&self) -> i32;
}

/// Something that can draw itself
pub trait Sprite {
    fn draw_on(&self, surface: &mut dyn DrawSurface);
}

/// A recorded [`DrawSurface`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    SetColor(Color),
    FillRectangle { x: i32, y: i32, width: i32, height: i32 },
    DrawRectangle { x: i32, y: i32, width: i32, height: i32 },
    FillCircle { x: i32, y: i32, radius: i32 },
    DrawCircle { x: i32, y: i32, radius: i32 },
    DrawText { x: i32, y: i32, text: String, font_size: i32 },
}

/// Surface that records every call in order
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    width: i32,
    height: i32,
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Filled shapes only, with the colour each was filled in
    pub fn fills(&self) -> Vec<(Color, &DrawCommand)> {
        let mut color = Color::BLACK;
        let mut fills = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::SetColor(c) => color = *c,
                DrawCommand::FillRectangle { .. } | DrawCommand::FillCircle { .. } => {
                    fills.push((color, command));
                }
                _ => {}
            }
        }
        fills
    }
}

impl DrawSurface for CommandRecorder {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::FillRectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::DrawRectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius });
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32) {
        self.commands.push(DrawCommand::DrawCircle { x, y, radius });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, font_size: i32) {
        self.commands.push(DrawCommand::DrawText {
            x,
            y,
            text: text.to_string(),
            font_size,
        });
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

impl GameState {
    /// Draw every sprite: background, blocks in insertion order, paddle,
    /// balls, then the score bar
    pub fn draw_on(&self, surface: &mut dyn DrawSurface) {
        if let Some(background) = &self.background {
            background.draw_on(surface);
        }
        for block in &self.blocks {
            block.draw_on(surface);
        }
        if let Some(paddle) = &self.paddle {
            paddle.draw_on(surface);
        }
        for ball in &self.balls {
            ball.draw_on(surface);
        }
        ScoreIndicator::new(
            self.score_counter(),
            self.settings.gui_width,
            self.settings.score_bar_height,
        )
        .draw_on(surface);
    }
}
