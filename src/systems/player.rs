use bevy_ecs::event::EventReader;
use bevy_ecs::query::With;
use bevy_ecs::system::{Res, Single};
use tracing::trace;

use crate::events::{GameCommand, GameEvent};
use crate::systems::components::{Dot, PlayerControlled};
use crate::systems::state::GameStage;

/// Makes the dot jump on every flap while the game is being played.
///
/// Runs every frame regardless of stage so that the click which leaves the
/// start screen is consumed here without turning into a jump.
pub fn player_control_system(
    mut events: EventReader<GameEvent>,
    stage: Res<GameStage>,
    mut dot: Single<&mut Dot, With<PlayerControlled>>,
) {
    for event in events.read() {
        if let GameEvent::Command(GameCommand::Flap) = event {
            if *stage == GameStage::Playing {
                dot.jump();
                trace!(y = dot.y, "Dot jumped");
            }
        }
    }
}

/// Applies gravity to the dot.
pub fn dot_physics_system(mut dot: Single<&mut Dot, With<PlayerControlled>>) {
    dot.update();
}
