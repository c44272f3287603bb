//! Projectile data: handles, behavior tags, spawn requests and slot state.
//!
//! A slot is always in one of two shapes:
//! - **inactive**: parked off-field, zero velocity, collision filters empty;
//! - **active**: every field written from a [`SpawnProjectile`] in one go.
//!
//! Only [`Projectile::activate`] and [`Projectile::deactivate`] switch between them, so a
//! half-initialized slot is never observable between ticks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

/// Marker for enemy entities. Homing reads their positions; nothing else here does.
#[derive(Component)]
pub struct Enemy;

/// Index of a pool slot.
///
/// Handles are reused: after a slot is released the same handle will be handed out again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectileHandle(pub u32);

impl ProjectileHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Damage category, read by the damage/collision collaborator for resistances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DamageCategory {
    #[default]
    Kinetic,
    Explosive,
    Frost,
    Electric,
    Energy,
    Earth,
    Void,
}

/// Behavior discriminator (see [`Behavior`] for the parameters each one carries).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BehaviorTag {
    Plain,
    Explosive,
    Freezing,
    Chaining,
    Bouncing,
    Wave,
    Zone,
    Homing,
    Spiraling,
}

/// Which side a spiraling projectile curls toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hand {
    #[default]
    Left,
    Right,
}

impl Hand {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Hand::Left => 1.0,
            Hand::Right => -1.0,
        }
    }
}

/// Per-tick motion/lifecycle rule together with its parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Behavior {
    #[default]
    Plain,
    /// Explodes on hit (resolved by the collision collaborator).
    Explosive { radius: f32 },
    /// May freeze the target on hit.
    Freezing { chance: f32, duration_ms: u32 },
    /// Jumps to `chains` further targets on hit.
    Chaining { chains: u8 },
    /// Reflects off the left, right and bottom field edges.
    Bouncing { bounces: u8 },
    /// Sine-weaves around the spawn X while travelling vertically.
    Wave { amplitude: f32, frequency: f32, phase: f32 },
    /// Lingering area (earth spikes, traps).
    Zone { duration_ms: u32, radius: f32 },
    /// Steers toward the nearest enemy; `turn_rate` is radians per tick.
    Homing { turn_rate: f32, speed: f32 },
    /// Accelerates sideways every tick, curling outward. `strength` is in units/s², so
    /// the push per tick is `strength * dt` (constant under the fixed step).
    Spiraling { strength: f32, hand: Hand },
}

impl Behavior {
    pub const DEFAULT_MARGIN: f32 = 20.0;
    pub const BOUNCING_MARGIN: f32 = 50.0;

    pub fn tag(&self) -> BehaviorTag {
        match self {
            Behavior::Plain => BehaviorTag::Plain,
            Behavior::Explosive { .. } => BehaviorTag::Explosive,
            Behavior::Freezing { .. } => BehaviorTag::Freezing,
            Behavior::Chaining { .. } => BehaviorTag::Chaining,
            Behavior::Bouncing { .. } => BehaviorTag::Bouncing,
            Behavior::Wave { .. } => BehaviorTag::Wave,
            Behavior::Zone { .. } => BehaviorTag::Zone,
            Behavior::Homing { .. } => BehaviorTag::Homing,
            Behavior::Spiraling { .. } => BehaviorTag::Spiraling,
        }
    }

    /// How far outside the field a projectile may drift before it is recycled.
    #[inline]
    pub fn off_field_margin(&self) -> f32 {
        match self {
            Behavior::Bouncing { .. } => Self::BOUNCING_MARGIN,
            _ => Self::DEFAULT_MARGIN,
        }
    }
}

/// Distance bound around a recorded origin (ring weapons).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitBound {
    pub origin: Vec2,
    pub max_distance: f32,
}

/// Everything needed to (re)initialize a slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnProjectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: i32,
    pub category: DamageCategory,
    pub pierce: u32,
    pub size: f32,
    pub behavior: Behavior,
    pub orbit: Option<OrbitBound>,
}

impl SpawnProjectile {
    pub fn new(position: Vec2, velocity: Vec2, damage: i32) -> Self {
        Self {
            position,
            velocity,
            damage,
            category: DamageCategory::Kinetic,
            pierce: 0,
            size: 1.0,
            behavior: Behavior::Plain,
            orbit: None,
        }
    }

    pub fn with_pierce(mut self, pierce: u32) -> Self {
        self.pierce = pierce;
        self
    }

    pub fn with_category(mut self, category: DamageCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_orbit(mut self, origin: Vec2, max_distance: f32) -> Self {
        self.orbit = Some(OrbitBound { origin, max_distance });
        self
    }

    /// Same request, moved and re-aimed.
    pub fn at(mut self, position: Vec2, velocity: Vec2) -> Self {
        self.position = position;
        self.velocity = velocity;
        self
    }
}

#[inline]
pub(crate) fn active_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [Layer::Enemy])
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub(crate) fn inactive_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [] as [Layer; 0])
}

#[inline]
pub(crate) fn body_enabled(layers: &CollisionLayers) -> bool {
    layers.filters.has_all(Layer::Enemy)
}

/// One pool slot.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub(crate) active: bool,
    pub(crate) body: CollisionLayers,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Visual heading in radians; follows the velocity.
    pub heading: f32,
    pub damage: i32,
    pub category: DamageCategory,
    pub size: f32,
    pub behavior: Behavior,
    pub pierce_left: u32,
    pub bounces_left: u8,
    /// Wave centre line.
    pub spawn_x: f32,
    /// Vertical distance covered so far (wave phase input).
    pub travelled: f32,
    /// Remaining zone lifetime.
    pub zone_left_ms: f32,
    pub orbit: Option<OrbitBound>,
}

impl Projectile {
    /// Where inactive slots wait. Far outside any field.
    pub const PARKED: Vec2 = Vec2::new(-100_000.0, -100_000.0);

    pub(crate) fn inactive() -> Self {
        Self {
            active: false,
            body: inactive_projectile_layers(),
            position: Self::PARKED,
            velocity: Vec2::ZERO,
            heading: 0.0,
            damage: 0,
            category: DamageCategory::Kinetic,
            size: 1.0,
            behavior: Behavior::Plain,
            pierce_left: 0,
            bounces_left: 0,
            spawn_x: 0.0,
            travelled: 0.0,
            zone_left_ms: 0.0,
            orbit: None,
        }
    }

    /// Overwrite every field from `spawn` and enable the body.
    pub(crate) fn activate(&mut self, spawn: &SpawnProjectile) {
        let (bounces_left, zone_left_ms) = match spawn.behavior {
            Behavior::Bouncing { bounces } => (bounces, 0.0),
            Behavior::Zone { duration_ms, .. } => (0, duration_ms as f32),
            _ => (0, 0.0),
        };

        *self = Self {
            active: true,
            body: active_projectile_layers(),
            position: spawn.position,
            velocity: spawn.velocity,
            heading: spawn.velocity.to_angle(),
            damage: spawn.damage,
            category: spawn.category,
            size: spawn.size,
            behavior: spawn.behavior,
            pierce_left: spawn.pierce,
            bounces_left,
            spawn_x: spawn.position.x,
            travelled: 0.0,
            zone_left_ms,
            orbit: spawn.orbit,
        };
    }

    /// Reset to the inactive shape. The caller owns returning the handle to the free list.
    pub(crate) fn deactivate(&mut self) {
        *self = Self::inactive();
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The collision body as the collision collaborator sees it.
    #[inline]
    pub fn body(&self) -> &CollisionLayers {
        &self.body
    }

    #[inline]
    pub fn tag(&self) -> BehaviorTag {
        self.behavior.tag()
    }

    pub fn explosion_radius(&self) -> Option<f32> {
        match self.behavior {
            Behavior::Explosive { radius } => Some(radius),
            _ => None,
        }
    }

    pub fn zone_radius(&self) -> Option<f32> {
        match self.behavior {
            Behavior::Zone { radius, .. } => Some(radius),
            _ => None,
        }
    }
}
