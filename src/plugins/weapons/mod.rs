//! Weapons plugin: held weapons fire into the projectile pool once per fixed tick.
//!
//! Every tick builds a fresh `ModifierSet` from the loadout, then for each weapon:
//! tick sub-state, gate on `can_fire`, fire. Beam weapons report a `LaserFired` message
//! for the hit-scan resolver instead of allocating projectiles.

pub mod kind;
pub mod loadout;
pub mod messages;
pub mod overheat;
pub mod patterns;
pub mod weapon;

use bevy::prelude::*;

use crate::common::{clock::now_ms, state::GameState};
use crate::plugins::core::{CombatSet, FieldBounds};
use crate::plugins::modifiers::{BasePlayerStats, PlayerStats};
use crate::plugins::projectiles::pool::ProjectilePool;

pub use kind::{BaseWeapon, EvolvedWeapon, SuperWeapon, WeaponConfig, WeaponKind};
pub use loadout::Loadout;
pub use messages::LaserFired;
pub use weapon::{FireContext, Volley, Weapon};

/// Where weapons fire from. `None` while there is no ship to fire from.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct FireOrigin {
    pub position: Option<Vec2>,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Loadout>()
        .init_resource::<FireOrigin>()
        .add_message::<LaserFired>();

    app.add_systems(
        FixedUpdate,
        fire_weapons
            .in_set(CombatSet::Fire)
            .run_if(in_state(GameState::InGame)),
    );
    app.add_systems(
        Update,
        sync_player_stats
            .run_if(resource_changed::<Loadout>.or(resource_changed::<BasePlayerStats>)),
    );
}

pub fn fire_weapons(
    time: Res<Time>,
    origin: Res<FireOrigin>,
    field: Res<FieldBounds>,
    mut loadout: ResMut<Loadout>,
    mut pool: ResMut<ProjectilePool>,
    mut lasers: MessageWriter<LaserFired>,
) {
    let Some(position) = origin.position else {
        return;
    };

    let now = now_ms(&time);
    let modifiers = loadout.modifiers();

    // Timestamps and heat change every tick; that is not a loadout change.
    let loadout = loadout.bypass_change_detection();
    for weapon in &mut loadout.weapons {
        weapon.tick(now);
        if !weapon.can_fire(now, &modifiers) {
            continue;
        }

        let ctx = FireContext {
            origin: position,
            now_ms: now,
            modifiers: &modifiers,
            field: **field,
        };
        let volley = weapon.fire(&ctx, &mut pool);
        if let Some(laser) = volley.laser {
            lasers.write(laser);
        }
    }
}

/// Rebuild the player-stat record from the host's base whenever gear or base changes.
pub fn sync_player_stats(
    loadout: Res<Loadout>,
    base: Res<BasePlayerStats>,
    mut stats: ResMut<PlayerStats>,
) {
    *stats = loadout.player_stats(&base);
}
