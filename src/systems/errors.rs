use bevy_ecs::event::EventReader;
use tracing::error;

use crate::error::GameError;

/// Logs errors raised by other systems during this frame.
pub fn log_error_system(mut errors: EventReader<GameError>) {
    for e in errors.read() {
        error!("{e}");
    }
}
