//! Centralized error types for the game.
//!
//! Startup failures (SDL initialization, font loading, logging setup) are fatal
//! and bubble up to `main`. Rendering failures during a frame are sent through
//! the ECS as events and logged, so a single bad frame never ends the game.

use std::path::PathBuf;

use bevy_ecs::event::Event;

/// Main error type for the game.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Failed to load font '{}': {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Errors related to drawing a frame.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Failed to render text '{text}': {reason}")]
    Text { text: String, reason: String },

    #[error("Failed to draw shape: {0}")]
    Shape(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
