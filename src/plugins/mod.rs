//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod evolution;
pub mod modifiers;
pub mod projectiles;
pub mod weapons;

/// Register gameplay plugins. All of them work headless.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    modifiers::plugin(app);
    app.add_plugins(ProjectilesPlugin);
    weapons::plugin(app);
    evolution::plugin(app);
}
