use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Commands, Query, ResMut};
use tracing::{debug, warn};

use crate::constants::{SCREEN_WIDTH, SPAWN_INTERVAL};
use crate::systems::components::{GameRng, Pipe, PipeQueue, ScoreResource};

/// Fixed-cadence spawn timer, counted in ticks.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipeSpawner {
    pub timer: u32,
}

impl PipeSpawner {
    /// Advances the timer by one tick.
    ///
    /// # Returns
    /// `true` on the tick the timer reaches `SPAWN_INTERVAL`; the timer restarts from zero.
    pub fn tick(&mut self) -> bool {
        self.timer += 1;
        if self.timer >= SPAWN_INTERVAL {
            self.timer = 0;
            true
        } else {
            false
        }
    }
}

/// Spawns a pipe at the right edge every `SPAWN_INTERVAL` ticks and scores it.
pub fn pipe_spawn_system(
    mut commands: Commands,
    mut spawner: ResMut<PipeSpawner>,
    mut queue: ResMut<PipeQueue>,
    mut score: ResMut<ScoreResource>,
    mut rng: ResMut<GameRng>,
) {
    if !spawner.tick() {
        return;
    }

    let pipe = Pipe::new(SCREEN_WIDTH, &mut rng.0);
    let entity = commands.spawn(pipe).id();
    queue.0.push_back(entity);
    score.0 += 1;

    debug!(?entity, gap_top = pipe.gap_top(), score = score.0, "Spawned pipe");
}

pub fn pipe_movement_system(mut pipes: Query<&mut Pipe>) {
    for mut pipe in pipes.iter_mut() {
        pipe.advance();
    }
}

/// Removes the oldest pipe once it has scrolled past the left edge.
///
/// Only the front of the queue is inspected; at most one pipe leaves per tick.
pub fn pipe_despawn_system(mut commands: Commands, mut queue: ResMut<PipeQueue>, pipes: Query<&Pipe>) {
    let Some(&front) = queue.0.front() else {
        return;
    };

    match pipes.get(front) {
        Ok(pipe) if pipe.is_off_screen() => {
            queue.0.pop_front();
            commands.entity(front).despawn();
            debug!(entity = ?front, x = pipe.x, "Despawned pipe");
        }
        Ok(_) => {}
        Err(_) => {
            // Entity was removed outside of this system; drop the stale handle.
            warn!(entity = ?front, "Pipe queue held a missing entity");
            queue.0.pop_front();
        }
    }
}
