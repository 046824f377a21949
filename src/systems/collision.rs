use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Single};
use tracing::debug;

use crate::constants::PIPE_WIDTH;
use crate::events::GameEvent;
use crate::systems::components::{Dot, Pipe, PlayerControlled};

/// Whether the dot overlaps either segment of `pipe`.
///
/// The dot is treated as its bounding square. It collides when it overlaps the
/// pipe horizontally and any part of it sits above the gap's top or below the
/// gap's bottom.
pub fn dot_hits_pipe(dot: &Dot, pipe: &Pipe) -> bool {
    let (min, max) = dot.bounds();
    let overlaps_x = max.x > pipe.x && min.x < pipe.x + PIPE_WIDTH;
    let outside_gap = min.y < pipe.gap_top() as f32 || max.y > pipe.gap_bottom() as f32;
    overlaps_x && outside_gap
}

/// Returns `true` on the first pipe the dot collides with.
pub fn check_collisions<'a>(dot: &Dot, pipes: impl IntoIterator<Item = &'a Pipe>) -> bool {
    pipes.into_iter().any(|pipe| dot_hits_pipe(dot, pipe))
}

/// Raises `GameEvent::DotDied` when the dot hits a pipe or leaves the screen.
pub fn collision_system(
    dot: Single<&Dot, With<PlayerControlled>>,
    pipes: Query<&Pipe>,
    mut events: EventWriter<GameEvent>,
) {
    let hit_pipe = check_collisions(&dot, pipes.iter());
    let out_of_bounds = dot.is_out_of_bounds();

    if hit_pipe || out_of_bounds {
        debug!(hit_pipe, out_of_bounds, y = dot.y, "Dot died");
        events.write(GameEvent::DotDied);
    }
}
