//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::block::BlockKind;
use super::color::palette;
use super::point::Point;
use super::rectangle::Rectangle;
use super::state::{GamePhase, GameState};
use super::velocity::Velocity;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    let input = if input.idle_mode {
        autopilot(state)
    } else {
        input.clone()
    };

    // Paddle first so balls see its new position this tick
    if let Some(paddle) = &state.paddle {
        if input.left {
            paddle.move_left();
        }
        if input.right {
            paddle.move_right();
        }
    }

    let substeps = state.settings.substeps;
    for ball in &mut state.balls {
        ball.move_substepped(&state.environment, substeps);
    }

    state.apply_events();
    state.update_phase();
}

/// Follow the lowest falling ball, or the lowest ball if none is falling
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let Some(paddle) = &state.paddle else {
        return input;
    };

    let lowest = |falling: bool| {
        state
            .balls
            .iter()
            .filter(|b| b.is_active() && (!falling || b.velocity().dy > 0.0))
            .max_by(|a, b| a.center().y.total_cmp(&b.center().y))
    };
    let Some(target) = lowest(true).or_else(|| lowest(false)) else {
        return input;
    };

    let dead_zone = state.settings.paddle_speed / 2.0;
    let offset = target.center().x - paddle.center_x();
    input.left = offset < -dead_zone;
    input.right = offset > dead_zone;
    input
}

/// Build the standard level: walls, exit zone, rows of blocks, paddle, balls
pub fn generate_level(state: &mut GameState) {
    let s = state.settings.clone();
    let w = s.gui_width;
    let h = s.gui_height;
    let bw = s.bounds_width;
    let bh = s.bounds_height;
    let bar = s.score_bar_height;

    state.set_background(
        Rectangle::new(Point::new(bw, bar + bh), w - 2.0 * bw, h - bh),
        palette::BACKGROUND,
    );

    // Side walls run from under the score bar to the bottom of the window
    state.add_boundary(
        Rectangle::new(Point::new(0.0, bar), bw, h),
        palette::BOUNDS,
        BlockKind::Solid,
    );
    state.add_boundary(
        Rectangle::new(Point::new(w - bw, bar), bw, h),
        palette::BOUNDS,
        BlockKind::Solid,
    );
    state.add_boundary(
        Rectangle::new(Point::new(0.0, bar), w, bh),
        palette::BOUNDS,
        BlockKind::Solid,
    );
    // Below the visible area so a ball is fully gone before it counts
    state.add_boundary(
        Rectangle::new(Point::new(0.0, h + bh), w, bh),
        palette::BOUNDS,
        BlockKind::ExitZone,
    );

    let rows = s.block_rows as usize;
    for row in 0..rows {
        let color = palette::row(row);
        let y = (row + 3) as f64 * s.block_height + bh + 1.0;
        for i in 0..(rows * 2 - row) {
            let x = w - ((i + 1) as f64 * s.block_width + bw);
            state.add_block(
                Rectangle::new(Point::new(x, y), s.block_width, s.block_height),
                color,
            );
        }
    }

    state.set_paddle(
        Rectangle::new(
            Point::new((w - s.paddle_width) / 2.0, h - bh - s.paddle_height),
            s.paddle_width,
            s.paddle_height,
        ),
        palette::PADDLE,
    );

    let (xs, ys) = s.ball_spawn_area();
    for _ in 0..s.ball_count {
        let center = Point::random_in(
            &mut state.rng,
            *xs.start(),
            *xs.end(),
            *ys.start(),
            *ys.end(),
        );
        let velocity = Velocity::random(&mut state.rng);
        state.spawn_ball(center, velocity);
    }

    log::info!(
        "Level generated: {} blocks, {} balls (seed {})",
        state.remaining_blocks(),
        state.remaining_balls(),
        s.seed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::color::Color;
    use crate::sim::listeners::{BLOCK_POINTS, LEVEL_CLEAR_BONUS};
    use crate::sim::state::GameEvent;

    fn idle() -> TickInput {
        TickInput {
            idle_mode: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_level_layout() {
        let state = GameState::new(Settings::default());
        assert_eq!(state.remaining_blocks(), 57);
        assert_eq!(state.remaining_balls(), 3);
        assert_eq!(state.balls.len(), 3);
        // 3 walls + exit + 57 blocks
        assert_eq!(state.blocks.len(), 61);
        // ...plus the paddle
        assert_eq!(state.environment.len(), 62);

        let paddle = state.paddle.as_ref().expect("paddle");
        assert_eq!(paddle.rectangle().upper_left(), Point::new(360.0, 583.0));

        // Top row starts at the right wall
        let first = state
            .blocks
            .iter()
            .find(|b| b.color == palette::row(0))
            .expect("row 0 block");
        assert_eq!(first.rectangle().upper_left(), Point::new(740.0, 71.0));

        for ball in &state.balls {
            let c = ball.center();
            assert!((18.0..=782.0).contains(&c.x), "{c}");
            assert!((198.0..=575.0).contains(&c.y), "{c}");
            assert!(ball.velocity().dx >= 0.0);
            assert!(ball.is_active());
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(Settings::default());
        let mut state2 = GameState::new(Settings::default());

        for _ in 0..600 {
            tick(&mut state1, &idle());
            tick(&mut state2, &idle());
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.balls.len(), state2.balls.len());
        for (a, b) in state1.balls.iter().zip(&state2.balls) {
            assert_eq!(a.center(), b.center());
            assert_eq!(a.velocity(), b.velocity());
        }
    }

    #[test]
    fn test_different_seeds_spawn_differently() {
        let a = GameState::new(Settings::default());
        let b = GameState::new(Settings {
            seed: Settings::default().seed + 1,
            ..Default::default()
        });
        let same = a
            .balls
            .iter()
            .zip(&b.balls)
            .all(|(x, y)| x.center() == y.center() && x.velocity() == y.velocity());
        assert!(!same);
    }

    #[test]
    fn test_breaking_last_block_wins() {
        let mut state = GameState::empty(Settings::default());
        let block = state.add_block(
            Rectangle::new(Point::new(100.0, 100.0), 50.0, 20.0),
            palette::row(3),
        );
        let ball_id = state.spawn_ball(Point::new(120.0, 50.0), Velocity::new(0.0, 10.0));

        for _ in 0..4 {
            tick(&mut state, &TickInput::default());
            assert!(state.last_events.is_empty());
        }
        tick(&mut state, &TickInput::default());

        assert_eq!(
            state.last_events,
            vec![
                GameEvent::BlockRemoved {
                    block_id: block.id,
                    ball_id
                },
                GameEvent::LevelCleared
            ]
        );
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.score(), BLOCK_POINTS + LEVEL_CLEAR_BONUS);
        assert!(state.environment.is_empty());
        assert!(state.blocks.is_empty());

        let ball = state.ball(ball_id).expect("ball still in play");
        assert_eq!(ball.color(), palette::row(3));
        assert_eq!(ball.center(), Point::new(120.0, 92.0));
        assert!(ball.velocity().dy < 0.0);

        // Finished sessions no longer advance
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 5);
    }

    #[test]
    fn test_last_ball_through_exit_loses() {
        let mut state = GameState::empty(Settings::default());
        state.add_block(
            Rectangle::new(Point::new(600.0, 100.0), 50.0, 20.0),
            palette::row(0),
        );
        let exit = state.add_boundary(
            Rectangle::new(Point::new(0.0, 200.0), 800.0, 10.0),
            Color::LIGHT_GRAY,
            BlockKind::ExitZone,
        );
        let ball_id = state.spawn_ball(Point::new(100.0, 150.0), Velocity::new(0.0, 10.0));

        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(
            state.last_events,
            vec![
                GameEvent::BallExited {
                    ball_id,
                    exit_id: exit.id
                },
                GameEvent::AllBallsLost
            ]
        );
        assert_eq!(state.phase, GamePhase::Lost);
        assert!(state.balls.is_empty());
        assert_eq!(state.remaining_balls(), 0);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_scene_without_blocks_keeps_playing() {
        let mut state = GameState::empty(Settings::default());
        state.spawn_ball(Point::new(100.0, 100.0), Velocity::new(1.0, 0.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score(), 0);

        // Nothing spawned at all
        let mut bare = GameState::empty(Settings::default());
        tick(&mut bare, &TickInput::default());
        assert_eq!(bare.phase, GamePhase::Playing);
    }

    #[test]
    fn test_paddle_moves_before_balls() {
        let mut state = GameState::empty(Settings::default());
        state.add_block(
            Rectangle::new(Point::new(600.0, 100.0), 50.0, 20.0),
            palette::row(0),
        );
        let paddle = state.set_paddle(
            Rectangle::new(Point::new(100.0, 300.0), 80.0, 7.0),
            palette::PADDLE,
        );
        // Misses the paddle unless it has already moved right this tick
        let ball_id = state.spawn_ball(Point::new(184.0, 290.0), Velocity::new(0.0, 10.0));

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right);

        assert_eq!(paddle.rectangle().upper_left().x, 108.0);
        let ball = state.ball(ball_id).expect("ball");
        assert_eq!(ball.center(), Point::new(184.0, 292.0));
        // Rightmost zone
        assert!((ball.velocity().angle() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_idle_mode_tracks_falling_ball() {
        let mut state = GameState::empty(Settings::default());
        state.add_block(
            Rectangle::new(Point::new(600.0, 100.0), 50.0, 20.0),
            palette::row(0),
        );
        let paddle = state.set_paddle(
            Rectangle::new(Point::new(360.0, 583.0), 80.0, 7.0),
            palette::PADDLE,
        );
        state.spawn_ball(Point::new(100.0, 300.0), Velocity::new(0.0, 1.0));
        state.spawn_ball(Point::new(700.0, 400.0), Velocity::new(0.0, -1.0));

        tick(&mut state, &idle());
        assert_eq!(paddle.rectangle().upper_left().x, 352.0);
    }

    #[test]
    fn test_score_matches_broken_blocks() {
        let mut state = GameState::new(Settings::default());
        let initial = state.remaining_blocks();
        for _ in 0..3000 {
            tick(&mut state, &idle());
            if state.phase != GamePhase::Playing {
                break;
            }
        }

        let broken = initial - state.remaining_blocks();
        let bonus = if state.phase == GamePhase::Won {
            LEVEL_CLEAR_BONUS
        } else {
            0
        };
        assert_eq!(state.score(), broken * BLOCK_POINTS + bonus);
        assert_eq!(state.balls.len() as i64, state.remaining_balls());
        assert_eq!(state.blocks.len() as i64, state.remaining_blocks() + 4);
    }
}
