use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{NonSend, NonSendMut, Query, Res, Single};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{colors, text, CANVAS_SIZE, DOT_RADIUS};
use crate::error::{GameError, RenderError};
use crate::systems::components::{Dot, Pipe, PlayerControlled, ScoreResource};
use crate::systems::state::GameStage;
use crate::texture::text::{Anchor, TextRenderer};

/// The fill color behind everything else for a given stage.
pub fn background_color(stage: &GameStage) -> Color {
    match stage {
        GameStage::StartScreen => colors::START_SCREEN,
        GameStage::Playing => colors::BACKGROUND,
        GameStage::GameOver { .. } => colors::GAME_OVER,
    }
}

pub fn score_text(score: &ScoreResource) -> String {
    format!("Score: {}", score.displayed())
}

pub fn background_render_system(mut canvas: NonSendMut<Canvas<Window>>, stage: Res<GameStage>) {
    canvas.set_draw_color(background_color(&stage));
    canvas.clear();
}

/// Draws the dot and every pipe.
pub fn entity_render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    dot: Single<&Dot, With<PlayerControlled>>,
    pipes: Query<&Pipe>,
    mut errors: EventWriter<GameError>,
) {
    let center = dot.center();
    if let Err(e) = canvas.filled_circle(center.x as i16, center.y as i16, DOT_RADIUS as i16, colors::DOT) {
        errors.write(RenderError::Shape(format!("Failed to draw dot: {e}")).into());
    }

    canvas.set_draw_color(colors::PIPE);
    for pipe in pipes.iter() {
        if let Err(e) = canvas.fill_rects(&[pipe.top_rect(), pipe.bottom_rect()]) {
            errors.write(RenderError::Shape(format!("Failed to draw pipe: {e}")).into());
        }
    }
}

/// Renders the text for the current stage: title and prompt, the score, or the death message.
pub fn hud_render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    text_renderer: NonSend<TextRenderer>,
    stage: Res<GameStage>,
    score: Res<ScoreResource>,
    mut errors: EventWriter<GameError>,
) {
    let center_x = (CANVAS_SIZE.x / 2) as i32;
    let height = CANVAS_SIZE.y as i32;

    let lines = match *stage {
        GameStage::StartScreen => vec![
            (text::TITLE.to_string(), colors::TITLE, Anchor::Center(Point::new(center_x, height / 4))),
            (text::START_PROMPT.to_string(), colors::TITLE, Anchor::Center(Point::new(center_x, height / 2))),
        ],
        GameStage::Playing => vec![(score_text(&score), colors::SCORE, Anchor::TopLeft(Point::new(10, 10)))],
        GameStage::GameOver { .. } => vec![(
            text::GAME_OVER.to_string(),
            colors::TITLE,
            Anchor::Center(Point::new(center_x, height / 2)),
        )],
    };

    for (line, color, anchor) in lines {
        if let Err(e) = text_renderer.render(&mut canvas, &line, color, anchor) {
            errors.write(e.into());
        }
    }
}

pub fn present_system(mut canvas: NonSendMut<Canvas<Window>>) {
    canvas.present();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_color_per_stage() {
        assert_eq!(background_color(&GameStage::StartScreen), Color::RGB(208, 216, 218));
        assert_eq!(background_color(&GameStage::Playing), Color::RGB(173, 216, 230));
        assert_eq!(background_color(&GameStage::game_over()), Color::RGB(0, 0, 0));
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(&ScoreResource(0)), "Score: 0");
        assert_eq!(score_text(&ScoreResource(3)), "Score: 300");
    }
}
