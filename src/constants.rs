//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;
use sdl2::pixels::Color;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(600, 400);
pub const SCREEN_WIDTH: f32 = CANVAS_SIZE.x as f32;
pub const SCREEN_HEIGHT: f32 = CANVAS_SIZE.y as f32;

pub const WINDOW_TITLE: &str = "Flappy Dot";

/// Radius of the player's dot, in pixels.
pub const DOT_RADIUS: f32 = 10.0;
/// Added to the dot's velocity every tick once it is falling.
pub const GRAVITY: f32 = 0.5;
/// Velocity applied by a jump. Negative is upwards.
pub const JUMP_SPEED: f32 = -8.0;

pub const PIPE_WIDTH: f32 = 50.0;
/// Vertical clearance between the top and bottom segments of a pipe.
pub const GAP_HEIGHT: u32 = 150;
/// Horizontal distance a pipe travels each tick.
pub const PIPE_SPEED: f32 = 5.0;
/// Minimum distance between the gap and either edge of the screen.
pub const GAP_MARGIN: u32 = 50;
pub const GAP_TOP_MIN: u32 = GAP_MARGIN;
pub const GAP_TOP_MAX: u32 = CANVAS_SIZE.y - GAP_HEIGHT - GAP_MARGIN;

// A canvas too short for the gap would make the gap range empty.
const _: () = assert!(GAP_TOP_MIN <= GAP_TOP_MAX);

/// Ticks between pipe spawns.
pub const SPAWN_INTERVAL: u32 = 100;
/// Multiplier applied to the internal score before it is shown.
pub const SCORE_MULTIPLIER: u32 = 100;

/// How long the game over screen stays up before the process exits (2 seconds at 60 Hz).
pub const GAME_OVER_HOLD_TICKS: u32 = 120;

pub const FONT_SIZE: u16 = 36;
pub const DEFAULT_FONT_PATH: &str = "OptimusPrinceps.ttf";

pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::RGB(173, 216, 230);
    pub const START_SCREEN: Color = Color::RGB(208, 216, 218);
    pub const GAME_OVER: Color = Color::RGB(0, 0, 0);
    pub const DOT: Color = Color::RGB(0, 0, 0);
    pub const PIPE: Color = Color::RGB(0, 128, 0);
    pub const TITLE: Color = Color::RGB(255, 0, 0);
    pub const SCORE: Color = Color::RGB(0, 0, 0);
}

pub mod text {
    pub const TITLE: &str = "FLAPPY DOT";
    pub const START_PROMPT: &str = "Click your mouse to start";
    pub const GAME_OVER: &str = "YOU DIED";
}
