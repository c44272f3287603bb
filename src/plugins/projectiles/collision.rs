use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::components::ProjectileHandle;
use super::messages::ProjectileHit;
use super::pool::{HitOutcome, ProjectilePool};

/// Apply hit reports to the pool's pierce budgets.
///
/// A projectile touching the same enemy twice in one frame (overlapping contacts) only
/// counts once. Different enemies in the same frame each cost a pierce.
pub fn apply_projectile_hits(
    mut hits: MessageReader<ProjectileHit>,
    mut pool: ResMut<ProjectilePool>,
    mut seen: Local<HashSet<(ProjectileHandle, Entity)>>,
) {
    seen.clear();

    for hit in hits.read() {
        if !seen.insert((hit.projectile, hit.target)) {
            continue;
        }

        match pool.register_hit(hit.projectile) {
            HitOutcome::Pierced { remaining } => {
                trace!("{:?} pierced {:?}, {remaining} left", hit.projectile, hit.target);
            }
            HitOutcome::Absorbed => {}
            // Already recycled earlier this frame (pierce ran out on another target).
            HitOutcome::Stale => {}
        }
    }
}
