#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::world::World;
use flappy_dot::error::GameError;
use flappy_dot::events::{GameCommand, GameEvent};
use flappy_dot::game::Game;
use flappy_dot::systems::{
    Dot, GameRng, GameStage, GlobalState, Pipe, PipeQueue, PipeSpawner, PlayerBundle, PlayerControlled, ScoreResource,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub const SEED: u64 = 0x5EED;

/// A headless game that has already left the start screen.
pub fn playing_game() -> Game {
    let mut game = Game::headless(SmallRng::seed_from_u64(SEED));
    game.send(GameCommand::Flap);
    game.tick();
    assert_eq!(game.stage(), GameStage::Playing);
    game
}

/// A bare world with every gameplay resource, for running single systems.
pub fn create_test_world() -> World {
    let mut world = World::new();

    EventRegistry::register_event::<GameEvent>(&mut world);
    EventRegistry::register_event::<GameError>(&mut world);
    world.insert_resource(GameRng(SmallRng::seed_from_u64(SEED)));
    world.insert_resource(GlobalState::default());
    world.insert_resource(PipeQueue::default());
    world.insert_resource(PipeSpawner::default());
    world.insert_resource(ScoreResource::default());
    world.insert_resource(GameStage::Playing);

    world
}

pub fn spawn_test_dot(world: &mut World, y: f32) -> Entity {
    world
        .spawn(PlayerBundle {
            player: PlayerControlled,
            dot: Dot::new(300.0, y),
        })
        .id()
}

/// Spawns a pipe and appends it to the queue, like the spawner does.
pub fn spawn_test_pipe(world: &mut World, x: f32, gap_top: u32) -> Entity {
    let entity = world.spawn(Pipe::with_gap(x, gap_top)).id();
    world.resource_mut::<PipeQueue>().0.push_back(entity);
    entity
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.send(event);
}

/// Events written since the last update.
pub fn current_events(world: &World) -> Vec<GameEvent> {
    world
        .resource::<Events<GameEvent>>()
        .iter_current_update_events()
        .copied()
        .collect()
}
