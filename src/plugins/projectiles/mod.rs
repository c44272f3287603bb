//! Projectiles plugin: fixed-capacity pool + per-tick motion + hit bookkeeping.
//!
//! # Invariants first
//! The pool is the only shared mutable state in combat. It is a single resource, so the
//! scheduler serializes every writer (weapons allocating, motion stepping, hits consuming
//! pierce). Each slot is either fully inactive or fully initialized, and its collision body
//! agrees with its active flag; a tick that finds them disagreeing repairs the slot and
//! logs an error, because it means some path skipped `Projectile::deactivate`.
//!
//! # Data flow (one fixed tick)
//! ```text
//!   FixedUpdate
//!┌──────────────────────────────────────────────────────────────────────┐
//!│  (A) CombatSet::Fire   weapons::fire_weapons                         │
//!│      - reads: Loadout, FireOrigin, Time                              │
//!│      - mutates: ProjectilePool (allocate), weapon timestamps         │
//!│                                                                      │
//!│  (B) CombatSet::Move   advance_projectiles                           │
//!│      - reads: Time, FieldBounds, Enemy transforms (homing)           │
//!│      - mutates: ProjectilePool (step, recycle off-field/expired)     │
//!└──────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate
//!┌──────────────────────────────────────────────────────────────────────┐
//!│  (C) collision collaborator writes ProjectileHit messages            │
//!│  (D) apply_projectile_hits: pierce budget → recycle on exhaustion    │
//!└──────────────────────────────────────────────────────────────────────┘
//! ```
//! Allocate, then move, then collide: a slot allocated this tick has been stepped once
//! before anything can hit it.
//!
//! # Where do we branch?
//! - Capacity: an empty free list drops the request (logged once per exhaustion episode).
//! - Homing: the locator can return no target; the projectile keeps its heading.
//! Everything else is straight-line per behavior.

pub mod collision;
pub mod components;
pub mod messages;
pub mod motion;
pub mod pool;

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::core::CombatSet;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let tunables = app
            .world()
            .get_resource::<Tunables>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(pool::ProjectilePool::from_tunables(&tunables))
            .add_message::<messages::ProjectileHit>();

        app.add_systems(
            FixedUpdate,
            motion::advance_projectiles
                .in_set(CombatSet::Move)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::apply_projectile_hits.run_if(in_state(GameState::InGame)),
        );
    }
}
