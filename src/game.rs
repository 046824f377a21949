//! This module contains the main game logic and state.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{common_conditions::resource_equals, IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use sdl2::event::EventType;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;
use tracing::{debug, info};

use crate::error::GameError;
use crate::events::GameEvent;
use crate::systems::{
    self, background_render_system, collision_system, dot_physics_system, entity_render_system, hud_render_system,
    log_error_system, pipe_despawn_system, pipe_movement_system, pipe_spawn_system, player_control_system, present_system,
    stage_system, Bindings, Dot, GameRng, GameStage, GlobalState, Pipe, PipeQueue, PipeSpawner, PlayerBundle, PlayerControlled,
    ScoreResource,
};
use crate::texture::text::TextRenderer;

/// System set for the gameplay systems, in the order they run each frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Systems that turn input into commands and act on them
    Input,
    /// Physics, spawning and collisions; only while playing
    Update,
    /// Systems that react to this frame's events
    Respond,
}

/// System set for all rendering systems.
///
/// Drawing happens between `Update` and `Respond`, so the frame on which the dot
/// dies is presented before the stage moves on to the game over screen.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSet {
    Draw,
    Present,
}

/// Owns the ECS world and the schedule that advances it one frame at a time.
///
/// A game built with [`Game::new`] polls SDL for input and draws to a window.
/// [`Game::headless`] builds the same world without any SDL resources, which is
/// what the tests drive.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Creates a windowed game. SDL handles are stored as non-send resources.
    pub fn new(canvas: Canvas<Window>, text_renderer: TextRenderer, mut event_pump: EventPump, rng: SmallRng) -> Game {
        info!("Starting game initialization");

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_world(&mut world, rng);

        world.insert_resource(Bindings::default());
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(text_renderer);
        world.insert_non_send_resource(event_pump);

        Self::configure_gameplay(&mut schedule);
        Self::configure_rendering(&mut schedule);
        schedule.add_systems(systems::input_system.before(player_control_system).in_set(GameplaySet::Input));

        info!("Game initialization completed successfully");
        Game { world, schedule }
    }

    /// Creates a game without a window. Commands are fed in through [`Game::send`].
    pub fn headless(rng: SmallRng) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_world(&mut world, rng);
        Self::configure_gameplay(&mut schedule);
        Self::configure_frame_order(&mut schedule);
        schedule.add_systems(log_error_system.in_set(GameplaySet::Respond));

        Game { world, schedule }
    }

    fn setup_world(world: &mut World, rng: SmallRng) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);

        world.insert_resource(GameRng(rng));
        world.insert_resource(GlobalState::default());
        Self::reset(world);
    }

    /// Puts the world back into its initial state: a fresh dot, no pipes, zero score, and the start screen.
    pub fn reset(world: &mut World) {
        let mut pipes = world.query_filtered::<Entity, With<Pipe>>();
        let stale: Vec<_> = pipes.iter(world).collect();
        let mut players = world.query_filtered::<Entity, With<PlayerControlled>>();
        let stale_players: Vec<_> = players.iter(world).collect();

        for entity in stale.into_iter().chain(stale_players) {
            world.despawn(entity);
        }

        world.spawn(PlayerBundle::default());
        world.insert_resource(PipeQueue::default());
        world.insert_resource(PipeSpawner::default());
        world.insert_resource(ScoreResource::default());
        world.insert_resource(GameStage::default());

        debug!("Game state reset");
    }

    fn configure_gameplay(schedule: &mut Schedule) {
        schedule
            .add_systems((
                player_control_system.in_set(GameplaySet::Input),
                (
                    pipe_spawn_system,
                    dot_physics_system,
                    pipe_movement_system,
                    pipe_despawn_system,
                    collision_system,
                )
                    .chain()
                    .in_set(GameplaySet::Update),
                stage_system.in_set(GameplaySet::Respond),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    GameplaySet::Update.run_if(resource_equals(GameStage::Playing)),
                    GameplaySet::Respond,
                )
                    .chain(),
            );
    }

    fn configure_rendering(schedule: &mut Schedule) {
        schedule
            .add_systems((
                (
                    background_render_system,
                    entity_render_system.run_if(resource_equals(GameStage::Playing)),
                    hud_render_system,
                )
                    .chain()
                    .in_set(RenderSet::Draw),
                (present_system, log_error_system).chain().in_set(RenderSet::Present),
            ));
        Self::configure_frame_order(schedule);
    }

    fn configure_frame_order(schedule: &mut Schedule) {
        schedule.configure_sets(
            (
                GameplaySet::Update,
                RenderSet::Draw,
                RenderSet::Present,
                GameplaySet::Respond,
            )
                .chain(),
        );
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::MouseMotion,
            EventType::MouseWheel,
            EventType::TextInput,
            EventType::TextEditing,
            EventType::JoyAxisMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::FingerMotion,
            EventType::DropFile,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    /// Queues a game event to be processed on the next tick.
    pub fn send(&mut self, event: impl Into<GameEvent>) {
        self.world.resource_mut::<Events<GameEvent>>().send(event.into());
    }

    /// Runs one frame.
    ///
    /// # Returns
    ///
    /// `true` once the game has asked to exit.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);

        // Events live for two frames; readers have seen everything by now
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<GameError>>().update();

        self.world.resource::<GlobalState>().exit
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn score(&self) -> ScoreResource {
        *self.world.resource::<ScoreResource>()
    }

    pub fn dot(&mut self) -> Option<Dot> {
        let mut query = self.world.query_filtered::<&Dot, With<PlayerControlled>>();
        query.single(&self.world).ok().copied()
    }

    /// Live pipes, oldest first.
    pub fn pipes(&self) -> Vec<Pipe> {
        let queue = self.world.resource::<PipeQueue>();
        queue
            .0
            .iter()
            .filter_map(|&entity| self.world.get::<Pipe>(entity).copied())
            .collect()
    }
}
