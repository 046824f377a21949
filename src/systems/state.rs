use bevy_ecs::event::EventReader;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};
use strum_macros::IntoStaticStr;
use tracing::info;

use crate::constants::GAME_OVER_HOLD_TICKS;
use crate::events::{GameCommand, GameEvent};
use crate::systems::components::{GlobalState, ScoreResource};

/// A resource to track the overall stage of the game.
///
/// Stages only move forward: `StartScreen` -> `Playing` -> `GameOver`, after which the game exits.
#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy, IntoStaticStr)]
pub enum GameStage {
    /// Title screen, waiting for the first click.
    #[default]
    StartScreen,
    /// The dot is in flight and pipes are scrolling.
    Playing,
    /// The death screen is showing; the game exits once `remaining_ticks` runs out.
    GameOver { remaining_ticks: u32 },
}

impl GameStage {
    pub fn game_over() -> Self {
        GameStage::GameOver {
            remaining_ticks: GAME_OVER_HOLD_TICKS,
        }
    }
}

/// Drives stage transitions and exit requests.
pub fn stage_system(
    mut events: EventReader<GameEvent>,
    mut stage: ResMut<GameStage>,
    mut state: ResMut<GlobalState>,
    score: Res<ScoreResource>,
) {
    // Count down a game over that started on an earlier frame
    if let GameStage::GameOver { remaining_ticks } = *stage {
        if remaining_ticks == 0 {
            if !state.exit {
                info!("Game over hold finished, exiting");
            }
            state.exit = true;
        } else {
            *stage = GameStage::GameOver {
                remaining_ticks: remaining_ticks - 1,
            };
        }
    }

    for event in events.read() {
        let next = match (*stage, event) {
            (_, GameEvent::Command(GameCommand::Exit)) => {
                info!("Exit requested. Exiting...");
                state.exit = true;
                None
            }
            (GameStage::StartScreen, GameEvent::Command(GameCommand::Flap)) => Some(GameStage::Playing),
            (GameStage::Playing, GameEvent::DotDied) => Some(GameStage::game_over()),
            _ => None,
        };

        if let Some(next) = next {
            let from: &'static str = (*stage).into();
            let to: &'static str = next.into();
            info!(from, to, score = score.displayed(), "Stage transition");
            *stage = next;
        }
    }
}
