//! Test helpers.
//!
//! Systems are run with `World::run_system_once` (via `RunSystemOnce`) so tests don't need a
//! full schedule. Deferred commands are flushed before returning.
//!
//! The simulation systems read `Res<Time>`; `clocked_world` inserts one and `advance_clock`
//! moves it forward by whole milliseconds, which is how weapon intervals are expressed.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use super::clock::Millis;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A world with a generic `Time` resource at t = 0.
pub fn clocked_world() -> World {
    let mut world = World::new();
    world.insert_resource(Time::<()>::default());
    world
}

/// Advance the world's `Time` by `ms` milliseconds (elapsed and delta).
pub fn advance_clock(world: &mut World, ms: Millis) {
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(ms));
}
