use std::collections::VecDeque;

use bevy_ecs::{bundle::Bundle, component::Component, entity::Entity, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;
use sdl2::rect::Rect;

use crate::constants::{
    DOT_RADIUS, GAP_HEIGHT, GAP_TOP_MAX, GAP_TOP_MIN, GRAVITY, JUMP_SPEED, PIPE_SPEED, PIPE_WIDTH, SCORE_MULTIPLIER,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// A tag component for entities that are controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// The player's dot.
///
/// The horizontal position is fixed at creation; only `y` and `velocity` change.
/// The dot hangs in place until the first jump, after which gravity applies every tick.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    x: f32,
    pub y: f32,
    pub velocity: f32,
    pub falling: bool,
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
    }
}

impl Dot {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            falling: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn jump(&mut self) {
        self.velocity = JUMP_SPEED;
        self.falling = true;
    }

    /// Advances the dot by one tick.
    pub fn update(&mut self) {
        if self.falling {
            self.velocity += GRAVITY;
            self.y += self.velocity;
        }
    }

    /// Whether the dot's center has left the vertical extent of the screen.
    pub fn is_out_of_bounds(&self) -> bool {
        self.y < 0.0 || self.y > SCREEN_HEIGHT
    }

    /// Top-left and bottom-right corners of the dot's bounding square.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let radius = Vec2::splat(DOT_RADIUS);
        (self.center() - radius, self.center() + radius)
    }
}

/// An obstacle: a top and a bottom segment with a vertical gap between them.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,
    gap_top: u32,
}

impl Pipe {
    /// Creates a pipe at `x` with a gap placed uniformly at random within the valid range.
    pub fn new(x: f32, rng: &mut impl Rng) -> Self {
        Self::with_gap(x, rng.random_range(GAP_TOP_MIN..=GAP_TOP_MAX))
    }

    /// Creates a pipe with a known gap. `gap_top` is clamped into the valid range.
    pub fn with_gap(x: f32, gap_top: u32) -> Self {
        Self {
            x,
            gap_top: gap_top.clamp(GAP_TOP_MIN, GAP_TOP_MAX),
        }
    }

    pub fn gap_top(&self) -> u32 {
        self.gap_top
    }

    pub fn gap_bottom(&self) -> u32 {
        self.gap_top + GAP_HEIGHT
    }

    pub fn advance(&mut self) {
        self.x -= PIPE_SPEED;
    }

    pub fn is_off_screen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x as i32, 0, PIPE_WIDTH as u32, self.gap_top)
    }

    /// The bottom segment extends a full screen height below the gap; the canvas clips it.
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x as i32, self.gap_bottom() as i32, PIPE_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}

#[derive(Bundle, Default)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub dot: Dot,
}

/// Pipe entities in spawn order, oldest first.
///
/// Every pipe moves at the same speed, so the front of the queue is always the
/// first one to leave the screen and pruning never needs to look past it.
#[derive(Resource, Debug, Default)]
pub struct PipeQueue(pub VecDeque<Entity>);

/// Number of pipes spawned so far.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

impl ScoreResource {
    /// The value shown to the player.
    pub fn displayed(&self) -> u32 {
        self.0 * SCORE_MULTIPLIER
    }
}

#[derive(Resource, Debug, Default)]
pub struct GlobalState {
    pub exit: bool,
}

/// Source of randomness for pipe placement.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_dot_is_static_until_first_jump() {
        let mut dot = Dot::default();
        for _ in 0..50 {
            dot.update();
        }
        assert_eq!(dot, Dot::default());
        assert_eq!(dot.center(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_dot_jump_then_gravity() {
        let mut dot = Dot::default();
        dot.jump();
        assert_eq!(dot.velocity, JUMP_SPEED);
        assert!(dot.falling);

        dot.update();
        assert_eq!(dot.velocity, -7.5);
        assert_eq!(dot.y, 192.5);

        dot.update();
        assert_eq!(dot.velocity, -7.0);
        assert_eq!(dot.y, 185.5);
        assert_eq!(dot.x(), 300.0);
    }

    #[test]
    fn test_dot_bounds() {
        assert!(!Dot::new(300.0, 0.0).is_out_of_bounds());
        assert!(!Dot::new(300.0, 400.0).is_out_of_bounds());
        assert!(Dot::new(300.0, -0.5).is_out_of_bounds());
        assert!(Dot::new(300.0, 400.5).is_out_of_bounds());

        let (min, max) = Dot::new(300.0, 100.0).bounds();
        assert_eq!(min, Vec2::new(290.0, 90.0));
        assert_eq!(max, Vec2::new(310.0, 110.0));
    }

    #[test]
    fn test_pipe_gap_in_range() {
        let mut rng = SmallRng::seed_from_u64(0xF1A9);
        for _ in 0..1000 {
            let pipe = Pipe::new(SCREEN_WIDTH, &mut rng);
            assert!((50..=200).contains(&pipe.gap_top()), "gap_top {} out of range", pipe.gap_top());
            assert_eq!(pipe.gap_bottom(), pipe.gap_top() + 150);
        }
    }

    #[test]
    fn test_pipe_with_gap_clamps() {
        assert_eq!(Pipe::with_gap(0.0, 0).gap_top(), 50);
        assert_eq!(Pipe::with_gap(0.0, 999).gap_top(), 200);
        assert_eq!(Pipe::with_gap(0.0, 120).gap_top(), 120);
    }

    #[test]
    fn test_pipe_moves_and_leaves() {
        let mut pipe = Pipe::with_gap(0.0, 100);
        pipe.advance();
        assert_eq!(pipe.x, -5.0);

        pipe.x = -50.0;
        assert!(!pipe.is_off_screen());
        pipe.advance();
        assert!(pipe.is_off_screen());
    }

    #[test]
    fn test_pipe_rects() {
        let pipe = Pipe::with_gap(120.0, 80);
        assert_eq!(pipe.top_rect(), Rect::new(120, 0, 50, 80));
        assert_eq!(pipe.bottom_rect(), Rect::new(120, 230, 50, 400));
    }

    #[test]
    fn test_displayed_score() {
        assert_eq!(ScoreResource(0).displayed(), 0);
        assert_eq!(ScoreResource(3).displayed(), 300);
    }
}
