//! Buffered hit reports.
//!
//! The collision collaborator only writes *intent* ("this projectile touched that enemy").
//! `apply_projectile_hits` is the single writer that turns those into pierce bookkeeping.

use bevy::prelude::*;

use super::components::ProjectileHandle;

#[derive(Message, Clone, Copy, Debug)]
pub struct ProjectileHit {
    pub projectile: ProjectileHandle,
    pub target: Entity,
}
