//! Per-tick projectile motion.
//!
//! Every active slot is stepped by its behavior's rule, then checked against the field
//! (per-behavior margin) and its orbit bound. Anything that expires goes straight back to the
//! free list within the same tick, so collision never sees a slot that should be gone.
//!
//! Coordinates are world space, y up: weapons fire toward +y and the player sits near the
//! bottom edge. Bouncing projectiles reflect off left, right and bottom; the top is open.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core::FieldBounds;

use super::components::{Behavior, Enemy, Projectile, ProjectileHandle};
use super::pool::ProjectilePool;

/// Speed gained on every edge contact of a bouncing projectile.
pub const BOUNCE_SPEEDUP: f32 = 1.1;

/// "Where is the nearest live enemy?" Provided by the enemy registry.
pub trait TargetLocator {
    fn nearest(&self, from: Vec2, max_range: f32) -> Option<Vec2>;
}

impl TargetLocator for [Vec2] {
    fn nearest(&self, from: Vec2, max_range: f32) -> Option<Vec2> {
        let max_sq = max_range * max_range;
        self.iter()
            .copied()
            .map(|p| (p, p.distance_squared(from)))
            .filter(|(_, d)| *d <= max_sq)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p)
    }
}

/// Locator for worlds without enemies.
pub struct NoTargets;

impl TargetLocator for NoTargets {
    fn nearest(&self, _from: Vec2, _max_range: f32) -> Option<Vec2> {
        None
    }
}

/// Inputs for one bulk update.
pub struct MotionEnv<'a, L: TargetLocator + ?Sized> {
    pub dt: f32,
    pub field: Rect,
    pub targets: &'a L,
    pub homing_range: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fate {
    Alive,
    Expired,
}

/// Wrap an angle into [-π, π].
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

impl ProjectilePool {
    /// Step every active slot by `env.dt` seconds. Returns how many slots were recycled.
    pub fn advance<L: TargetLocator + ?Sized>(&mut self, env: &MotionEnv<L>) -> usize {
        let mut recycled = 0;

        for index in 0..self.slots.len() {
            if self.repair_slot(index) {
                continue;
            }

            let slot = &mut self.slots[index];
            if !slot.is_active() {
                continue;
            }

            if step(slot, env) == Fate::Expired {
                self.release(ProjectileHandle(index as u32));
                recycled += 1;
            }
        }

        recycled
    }
}

fn step<L: TargetLocator + ?Sized>(p: &mut Projectile, env: &MotionEnv<L>) -> Fate {
    let dt = env.dt;

    match p.behavior {
        Behavior::Bouncing { .. } => {
            if p.bounces_left == 0 {
                return Fate::Expired;
            }
            p.position += p.velocity * dt;
            if bounce_off_edges(p, env.field) == Fate::Expired {
                return Fate::Expired;
            }
        }
        Behavior::Wave {
            amplitude,
            frequency,
            phase,
        } => {
            p.travelled += p.velocity.y.abs() * dt;
            p.position.y += p.velocity.y * dt;
            p.position.x = p.spawn_x + (p.travelled * frequency + phase).sin() * amplitude;
        }
        Behavior::Homing { turn_rate, speed } => {
            if let Some(target) = env.targets.nearest(p.position, env.homing_range) {
                let desired = (target - p.position).to_angle();
                let turn = wrap_angle(desired - p.heading).clamp(-turn_rate, turn_rate);
                p.heading = wrap_angle(p.heading + turn);
                p.velocity = Vec2::from_angle(p.heading) * speed;
            }
            p.position += p.velocity * dt;
        }
        Behavior::Spiraling { strength, hand } => {
            let side = p.velocity.perp().normalize_or_zero() * hand.sign();
            p.velocity += side * strength * dt;
            p.position += p.velocity * dt;
        }
        Behavior::Zone { .. } => {
            p.zone_left_ms -= dt * 1000.0;
            if p.zone_left_ms <= 0.0 {
                return Fate::Expired;
            }
            p.position += p.velocity * dt;
        }
        Behavior::Plain
        | Behavior::Explosive { .. }
        | Behavior::Freezing { .. }
        | Behavior::Chaining { .. } => {
            p.position += p.velocity * dt;
        }
    }

    if p.velocity != Vec2::ZERO {
        p.heading = p.velocity.to_angle();
    }

    let margin = p.behavior.off_field_margin();
    if !env.field.inflate(margin).contains(p.position) {
        return Fate::Expired;
    }

    if let Some(orbit) = p.orbit {
        if orbit.max_distance > 0.0 && p.position.distance(orbit.origin) > orbit.max_distance {
            return Fate::Expired;
        }
    }

    Fate::Alive
}

/// Reflect off left, right and bottom. Each contact costs one bounce and adds speed.
fn bounce_off_edges(p: &mut Projectile, field: Rect) -> Fate {
    let mut contacts = 0u8;

    if p.position.x < field.min.x {
        p.position.x = field.min.x;
        p.velocity.x = p.velocity.x.abs();
        contacts += 1;
    } else if p.position.x > field.max.x {
        p.position.x = field.max.x;
        p.velocity.x = -p.velocity.x.abs();
        contacts += 1;
    }

    if p.position.y < field.min.y {
        p.position.y = field.min.y;
        p.velocity.y = p.velocity.y.abs();
        contacts += 1;
    }

    for _ in 0..contacts {
        p.velocity *= BOUNCE_SPEEDUP;
        p.bounces_left = p.bounces_left.saturating_sub(1);
        if p.bounces_left == 0 {
            return Fate::Expired;
        }
    }

    Fate::Alive
}

/// Bulk per-tick update. Runs after weapons fire and before collisions are resolved.
pub fn advance_projectiles(
    time: Res<Time>,
    field: Res<FieldBounds>,
    tunables: Res<Tunables>,
    mut pool: ResMut<ProjectilePool>,
    q_enemies: Query<&Transform, With<Enemy>>,
    mut targets: Local<Vec<Vec2>>,
) {
    targets.clear();
    targets.extend(q_enemies.iter().map(|tf| tf.translation.truncate()));

    let env = MotionEnv {
        dt: time.delta_secs(),
        field: field.0,
        targets: targets.as_slice(),
        homing_range: tunables.homing_range,
    };

    let recycled = pool.advance(&env);
    if recycled > 0 {
        trace!("recycled {recycled} projectiles");
    }
}
