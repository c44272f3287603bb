//! Fixed-capacity projectile arena.
//!
//! Slots live in one dense `Vec` created up front; a free list of handles hands them out
//! and takes them back. Nothing is allocated per shot.
//!
//! Capacity is a decision, not a failure: when the free list is empty the request is dropped
//! and logged. Usage above the warning / critical ratios is logged once per transition.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{Projectile, ProjectileHandle, SpawnProjectile, body_enabled};

/// Usage band of the pool, used to log transitions instead of every allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PoolPressure {
    #[default]
    Normal,
    Warning,
    Critical,
}

/// Result of reporting an enemy hit for a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// The projectile keeps flying with `remaining` pierce left.
    Pierced { remaining: u32 },
    /// Pierce was exhausted; the slot has been returned to the pool.
    Absorbed,
    /// The handle no longer refers to an active projectile.
    Stale,
}

/// Snapshot for diagnostics overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub active: usize,
    pub capacity: usize,
    pub peak: usize,
    pub dropped: u64,
}

#[derive(Resource, Debug)]
pub struct ProjectilePool {
    pub(crate) slots: Vec<Projectile>,
    pub(crate) free: Vec<ProjectileHandle>,
    warn_ratio: f32,
    critical_ratio: f32,
    pressure: PoolPressure,
    exhaustion_logged: bool,
    peak: usize,
    dropped: u64,
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl ProjectilePool {
    pub const DEFAULT_CAPACITY: usize = 500;

    pub fn new(capacity: usize) -> Self {
        let slots = vec![Projectile::inactive(); capacity];
        // Reversed so the first allocations come out as 0, 1, 2, ...
        let free = (0..capacity as u32).rev().map(ProjectileHandle).collect();

        Self {
            slots,
            free,
            warn_ratio: 0.8,
            critical_ratio: 0.9,
            pressure: PoolPressure::Normal,
            exhaustion_logged: false,
            peak: 0,
            dropped: 0,
        }
    }

    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self::new(tunables.pool_capacity)
            .with_thresholds(tunables.pool_warn_ratio, tunables.pool_critical_ratio)
    }

    pub fn with_thresholds(mut self, warn_ratio: f32, critical_ratio: f32) -> Self {
        self.warn_ratio = warn_ratio;
        self.critical_ratio = critical_ratio.max(warn_ratio);
        self
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[inline]
    pub fn pressure(&self) -> PoolPressure {
        self.pressure
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            active: self.active_count(),
            capacity: self.capacity(),
            peak: self.peak,
            dropped: self.dropped,
        }
    }

    /// The projectile behind `handle`, if it is currently active.
    pub fn get(&self, handle: ProjectileHandle) -> Option<&Projectile> {
        self.slots.get(handle.index()).filter(|p| p.is_active())
    }

    /// Active projectiles, for the collision and render collaborators.
    pub fn iter_active(&self) -> impl Iterator<Item = (ProjectileHandle, &Projectile)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, p)| (ProjectileHandle(i as u32), p))
    }

    /// Activate a free slot from `spawn`. Returns `None` (and drops the request) when full.
    pub fn allocate(&mut self, spawn: &SpawnProjectile) -> Option<ProjectileHandle> {
        let Some(handle) = self.free.pop() else {
            self.dropped += 1;
            if !self.exhaustion_logged {
                warn!(
                    "projectile pool exhausted ({} slots); dropping spawn requests",
                    self.capacity()
                );
                self.exhaustion_logged = true;
            }
            return None;
        };

        self.slots[handle.index()].activate(spawn);
        self.peak = self.peak.max(self.active_count());
        self.update_pressure();
        Some(handle)
    }

    /// `count` straight-centred shots fanned over `spread_degrees`.
    ///
    /// Returns how many were actually allocated.
    pub fn fire_spread(
        &mut self,
        origin: Vec2,
        damage: i32,
        pierce: u32,
        count: usize,
        spread_degrees: f32,
        speed: f32,
    ) -> usize {
        let template = SpawnProjectile::new(origin, Vec2::Y * speed, damage).with_pierce(pierce);
        self.fire_spread_with(&template, count, spread_degrees, speed)
    }

    /// [`fire_spread`](Self::fire_spread) with a full request as template.
    /// Position, behavior and the rest are taken from `template`; only the velocity changes.
    pub fn fire_spread_with(
        &mut self,
        template: &SpawnProjectile,
        count: usize,
        spread_degrees: f32,
        speed: f32,
    ) -> usize {
        spread_directions(count, spread_degrees)
            .filter_map(|dir| {
                let spawn = template.at(template.position, dir * speed);
                self.allocate(&spawn)
            })
            .count()
    }

    /// Return a slot to the pool. `false` if it was not active.
    pub fn release(&mut self, handle: ProjectileHandle) -> bool {
        let Some(slot) = self.slots.get_mut(handle.index()) else {
            return false;
        };
        if !slot.is_active() {
            return false;
        }

        slot.deactivate();
        self.free.push(handle);
        self.exhaustion_logged = false;
        self.update_pressure();
        true
    }

    /// Deactivate everything (run reset). Handles are reissued from 0 again.
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
        self.free.clear();
        self.free
            .extend((0..self.slots.len() as u32).rev().map(ProjectileHandle));
        self.exhaustion_logged = false;
        self.update_pressure();
    }

    /// Apply one enemy hit to a projectile's pierce budget.
    ///
    /// Pierce `p` means `p` hits are survived; hit `p + 1` absorbs the projectile.
    pub fn register_hit(&mut self, handle: ProjectileHandle) -> HitOutcome {
        let Some(slot) = self.slots.get_mut(handle.index()).filter(|p| p.is_active()) else {
            return HitOutcome::Stale;
        };

        if slot.pierce_left == 0 {
            self.release(handle);
            return HitOutcome::Absorbed;
        }

        slot.pierce_left -= 1;
        HitOutcome::Pierced {
            remaining: slot.pierce_left,
        }
    }

    /// Active slots whose body is disabled, or inactive slots whose body is enabled.
    ///
    /// Both mean a deactivation path skipped [`Projectile::deactivate`]. The slot is forced
    /// inactive and its handle returned if it was holding one.
    pub(crate) fn repair_slot(&mut self, index: usize) -> bool {
        let slot = &mut self.slots[index];
        let enabled = body_enabled(&slot.body);
        if slot.active == enabled {
            return false;
        }

        error!(
            "projectile slot {index}: active={} but collision body enabled={enabled}; forcing deactivation",
            slot.active
        );
        let was_active = slot.active;
        slot.deactivate();
        if was_active {
            self.free.push(ProjectileHandle(index as u32));
            self.update_pressure();
        }
        true
    }

    pub(crate) fn update_pressure(&mut self) {
        let capacity = self.capacity().max(1) as f32;
        let usage = self.active_count() as f32 / capacity;

        let next = if usage > self.critical_ratio {
            PoolPressure::Critical
        } else if usage > self.warn_ratio {
            PoolPressure::Warning
        } else {
            PoolPressure::Normal
        };

        if next == self.pressure {
            return;
        }

        if next > self.pressure {
            match next {
                PoolPressure::Critical => error!(
                    "projectile pool at {:.0}% ({} / {}); sustained usage here usually means a leak",
                    usage * 100.0,
                    self.active_count(),
                    self.capacity()
                ),
                PoolPressure::Warning => warn!(
                    "projectile pool at {:.0}% ({} / {})",
                    usage * 100.0,
                    self.active_count(),
                    self.capacity()
                ),
                PoolPressure::Normal => {}
            }
        } else {
            debug!("projectile pool pressure eased to {next:?}");
        }

        self.pressure = next;
    }
}

/// Unit directions for a fan of `count` shots centred on straight up.
///
/// A single shot has no angle step (it would divide by `count - 1`) and goes straight.
pub fn spread_directions(count: usize, spread_degrees: f32) -> impl Iterator<Item = Vec2> {
    let spread = spread_degrees.to_radians();
    let step = if count > 1 {
        spread / (count - 1) as f32
    } else {
        0.0
    };
    let start = if count > 1 { -spread * 0.5 } else { 0.0 };

    (0..count).map(move |i| Vec2::from_angle(start + step * i as f32).rotate(Vec2::Y))
}

/// Unit directions for `count` shots evenly around a full circle, starting at `offset` radians
/// from straight up.
pub fn ring_directions(count: usize, offset: f32) -> impl Iterator<Item = Vec2> {
    let step = if count > 0 {
        std::f32::consts::TAU / count as f32
    } else {
        0.0
    };

    (0..count).map(move |i| Vec2::from_angle(offset + step * i as f32).rotate(Vec2::Y))
}
