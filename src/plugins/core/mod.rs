//! Core plugin: shared resources, field bounds and combat ordering.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Playfield rectangle in world units. Used for off-field recycling and spread layout.
#[derive(Resource, Debug, Clone, Copy, Deref)]
pub struct FieldBounds(pub Rect);

impl Default for FieldBounds {
    fn default() -> Self {
        Self(Tunables::default().field_rect())
    }
}

/// Per-tick combat ordering: weapons allocate before projectiles move.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatSet {
    Fire,
    Move,
}

/// Keeps a host-provided `Tunables` and derives the field from it.
pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    let field = app.world().resource::<Tunables>().field_rect();
    app.insert_resource(FieldBounds(field));
    app.configure_sets(FixedUpdate, (CombatSet::Fire, CombatSet::Move).chain());
}

#[cfg(test)]
mod tests;
