//! Game composition root.
//!
//! The combat core has no window or renderer of its own; the host game adds those.
//! - `configure_game`: state + gameplay plugins, on top of whatever the host installed.
//! - `configure_headless`: the same, for integration tests on `MinimalPlugins`.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins;

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - The caller provides `MinimalPlugins` and `StatesPlugin`.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by every app that hosts the combat core.
pub fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
