//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `volley::game::configure_headless` to install gameplay plugins.
//!
//! Schedules are driven by hand so time is deterministic: `step_fixed` advances the generic
//! `Time` clock and runs one fixed tick (allocate → move → collide).

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));

    volley::game::configure_headless(&mut app);
    app
}

/// Headless app with host-provided tunables installed before gameplay registers.
pub fn app_headless_with(tunables: volley::common::tunables::Tunables) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(tunables);

    volley::game::configure_headless(&mut app);
    app
}

/// Advance the clock by `ms` and run one fixed tick plus the post-tick hit pass.
pub fn step_fixed(app: &mut App, ms: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(ms));
    app.world_mut().run_schedule(FixedUpdate);
    app.world_mut().run_schedule(FixedPostUpdate);
}
