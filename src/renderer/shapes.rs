//! Sprites for the game's shapes

use std::rc::Rc;

use super::{DrawSurface, Sprite};
use crate::sim::{Ball, Block, Color, Counter, Paddle, Rectangle, palette};

/// Filled rectangle with a black outline
fn outlined_rectangle(surface: &mut dyn DrawSurface, rect: Rectangle, fill: Color) {
    let ul = rect.upper_left();
    let (x, y) = (ul.x as i32, ul.y as i32);
    let (w, h) = (rect.width() as i32, rect.height() as i32);
    surface.set_color(fill);
    surface.fill_rectangle(x, y, w, h);
    surface.set_color(palette::OUTLINE);
    surface.draw_rectangle(x, y, w, h);
}

impl Sprite for Block {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        outlined_rectangle(surface, self.rectangle(), self.color);
    }
}

impl Sprite for Paddle {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        self.block().draw_on(surface);
    }
}

impl Sprite for Ball {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        let c = self.center();
        let (x, y, r) = (c.x as i32, c.y as i32, self.radius() as i32);
        surface.set_color(self.color());
        surface.fill_circle(x, y, r);
        surface.set_color(palette::OUTLINE);
        surface.draw_circle(x, y, r);
    }
}

/// Score bar across the top of the window
#[derive(Debug, Clone)]
pub struct ScoreIndicator {
    score: Rc<Counter>,
    width: f64,
    height: f64,
}

impl ScoreIndicator {
    pub const TEXT_X: i32 = 10;
    pub const TEXT_Y: i32 = 15;
    pub const FONT_SIZE: i32 = 16;

    pub fn new(score: Rc<Counter>, width: f64, height: f64) -> Self {
        Self {
            score,
            width,
            height,
        }
    }
}

impl Sprite for ScoreIndicator {
    fn draw_on(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(palette::SCORE_BAR);
        surface.fill_rectangle(0, 0, self.width as i32, self.height as i32);
        surface.set_color(palette::SCORE_TEXT);
        surface.draw_text(
            Self::TEXT_X,
            Self::TEXT_Y,
            &format!("Score: {}", self.score),
            Self::FONT_SIZE,
        );
    }
}
