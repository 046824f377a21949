use bevy_ecs::system::RunSystemOnce;
use flappy_dot::events::GameEvent;
use flappy_dot::systems::collision_system;
use speculoos::prelude::*;

mod common;

#[test]
fn test_no_event_inside_gap() {
    let mut world = common::create_test_world();
    common::spawn_test_dot(&mut world, 100.0);
    common::spawn_test_pipe(&mut world, 295.0, 50);

    world.run_system_once(collision_system).expect("System should run successfully");

    assert_that(&common::current_events(&world)).is_empty();
}

#[test]
fn test_pipe_hit_raises_death() {
    let mut world = common::create_test_world();
    common::spawn_test_dot(&mut world, 40.0);
    common::spawn_test_pipe(&mut world, 295.0, 50);

    world.run_system_once(collision_system).expect("System should run successfully");

    assert_that(&common::current_events(&world)).contains(GameEvent::DotDied);
}

#[test]
fn test_any_pipe_counts() {
    let mut world = common::create_test_world();
    common::spawn_test_dot(&mut world, 100.0);
    common::spawn_test_pipe(&mut world, 500.0, 150);
    common::spawn_test_pipe(&mut world, 295.0, 50);
    common::spawn_test_pipe(&mut world, 280.0, 150);

    world.run_system_once(collision_system).expect("System should run successfully");

    assert_that(&common::current_events(&world)).has_length(1);
}

#[test]
fn test_leaving_screen_raises_death_without_pipes() {
    for y in [-1.0, 401.0] {
        let mut world = common::create_test_world();
        common::spawn_test_dot(&mut world, y);

        world.run_system_once(collision_system).expect("System should run successfully");

        assert_that(&common::current_events(&world)).contains(GameEvent::DotDied);
    }
}

#[test]
fn test_screen_edges_are_safe() {
    for y in [0.0, 400.0] {
        let mut world = common::create_test_world();
        common::spawn_test_dot(&mut world, y);

        world.run_system_once(collision_system).expect("System should run successfully");

        assert_that(&common::current_events(&world)).is_empty();
    }
}
