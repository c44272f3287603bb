//! The modifier snapshot weapons read, and the player-stat record effects also write into.

use bevy::prelude::*;

/// Effect names shared by characters, passives and buildings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    Damage,
    FireRate,
    Pierce,
    ProjectileSpeed,
    ProjectileSize,
    CritChance,
    CritDamage,
    ExtraProjectiles,
    ExplosionRadius,
    ExtraShots,
    DotDuration,
    Lifetime,
    Homing,
}

/// How contributions to a field combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combine {
    /// Contributions sum.
    Add,
    /// Contributions are factors; the result is their product (order-independent).
    Multiply,
    /// Any positive contribution switches the flag on.
    Enable,
}

impl Stat {
    pub const ALL: [Stat; 13] = [
        Stat::Damage,
        Stat::FireRate,
        Stat::Pierce,
        Stat::ProjectileSpeed,
        Stat::ProjectileSize,
        Stat::CritChance,
        Stat::CritDamage,
        Stat::ExtraProjectiles,
        Stat::ExplosionRadius,
        Stat::ExtraShots,
        Stat::DotDuration,
        Stat::Lifetime,
        Stat::Homing,
    ];

    pub const fn combine(self) -> Combine {
        match self {
            Stat::Damage
            | Stat::Pierce
            | Stat::CritChance
            | Stat::CritDamage
            | Stat::ExtraProjectiles
            | Stat::ExtraShots => Combine::Add,
            Stat::FireRate
            | Stat::ProjectileSpeed
            | Stat::ProjectileSize
            | Stat::ExplosionRadius
            | Stat::DotDuration
            | Stat::Lifetime => Combine::Multiply,
            Stat::Homing => Combine::Enable,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stat::Damage => "damage",
            Stat::FireRate => "fire_rate",
            Stat::Pierce => "pierce",
            Stat::ProjectileSpeed => "projectile_speed",
            Stat::ProjectileSize => "projectile_size",
            Stat::CritChance => "crit_chance",
            Stat::CritDamage => "crit_damage",
            Stat::ExtraProjectiles => "extra_projectiles",
            Stat::ExplosionRadius => "explosion_radius",
            Stat::ExtraShots => "extra_shots",
            Stat::DotDuration => "dot_duration",
            Stat::Lifetime => "lifetime",
            Stat::Homing => "homing",
        }
    }

    pub fn from_name(name: &str) -> Option<Stat> {
        Stat::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Aggregated combat effects. Rebuilt from scratch whenever it is needed; never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModifierSet {
    pub damage_multiplier: f32,
    /// Higher is faster: fire intervals are divided by this.
    pub fire_rate_multiplier: f32,
    pub pierce: u32,
    pub speed_multiplier: f32,
    pub size_multiplier: f32,
    pub crit_chance: f32,
    /// Bonus on top of the damage resolver's base crit multiplier.
    pub crit_damage: f32,
    pub extra_projectiles: u32,
    pub explosion_radius_multiplier: f32,
    /// Whole extra copies of a volley, fired side by side.
    pub extra_shots: u32,
    pub dot_duration_multiplier: f32,
    pub lifetime_multiplier: f32,
    pub homing: bool,
}

impl Default for ModifierSet {
    fn default() -> Self {
        Self {
            damage_multiplier: 1.0,
            fire_rate_multiplier: 1.0,
            pierce: 0,
            speed_multiplier: 1.0,
            size_multiplier: 1.0,
            crit_chance: 0.0,
            crit_damage: 0.0,
            extra_projectiles: 0,
            explosion_radius_multiplier: 1.0,
            extra_shots: 0,
            dot_duration_multiplier: 1.0,
            lifetime_multiplier: 1.0,
            homing: false,
        }
    }
}

impl ModifierSet {
    /// Lowest fire-rate multiplier a snapshot may carry (intervals divide by it).
    pub const MIN_FIRE_RATE: f32 = 0.05;

    /// Apply one contribution using the field's own combination rule.
    pub fn apply(&mut self, stat: Stat, amount: f32) {
        match stat.combine() {
            Combine::Add => self.add_flat(stat, amount),
            Combine::Multiply => {
                if let Some(value) = self.float_mut(stat) {
                    *value *= amount;
                }
            }
            Combine::Enable => self.homing |= amount > 0.0,
        }
    }

    /// Add `amount` to the field regardless of its rule (building bonuses).
    pub fn add_flat(&mut self, stat: Stat, amount: f32) {
        match stat {
            Stat::Pierce => self.pierce = add_count(self.pierce, amount),
            Stat::ExtraProjectiles => {
                self.extra_projectiles = add_count(self.extra_projectiles, amount)
            }
            Stat::ExtraShots => self.extra_shots = add_count(self.extra_shots, amount),
            Stat::Homing => self.homing |= amount > 0.0,
            _ => {
                if let Some(value) = self.float_mut(stat) {
                    *value += amount;
                }
            }
        }
    }

    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Damage => self.damage_multiplier,
            Stat::FireRate => self.fire_rate_multiplier,
            Stat::Pierce => self.pierce as f32,
            Stat::ProjectileSpeed => self.speed_multiplier,
            Stat::ProjectileSize => self.size_multiplier,
            Stat::CritChance => self.crit_chance,
            Stat::CritDamage => self.crit_damage,
            Stat::ExtraProjectiles => self.extra_projectiles as f32,
            Stat::ExplosionRadius => self.explosion_radius_multiplier,
            Stat::ExtraShots => self.extra_shots as f32,
            Stat::DotDuration => self.dot_duration_multiplier,
            Stat::Lifetime => self.lifetime_multiplier,
            Stat::Homing => {
                if self.homing {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Clamp fields that would break downstream arithmetic.
    pub(crate) fn sanitize(&mut self) {
        self.fire_rate_multiplier = self.fire_rate_multiplier.max(Self::MIN_FIRE_RATE);
        self.damage_multiplier = self.damage_multiplier.max(0.0);
        self.speed_multiplier = self.speed_multiplier.max(0.0);
        self.size_multiplier = self.size_multiplier.max(0.0);
        self.crit_chance = self.crit_chance.clamp(0.0, 1.0);
    }

    fn float_mut(&mut self, stat: Stat) -> Option<&mut f32> {
        match stat {
            Stat::Damage => Some(&mut self.damage_multiplier),
            Stat::FireRate => Some(&mut self.fire_rate_multiplier),
            Stat::ProjectileSpeed => Some(&mut self.speed_multiplier),
            Stat::ProjectileSize => Some(&mut self.size_multiplier),
            Stat::CritChance => Some(&mut self.crit_chance),
            Stat::CritDamage => Some(&mut self.crit_damage),
            Stat::ExplosionRadius => Some(&mut self.explosion_radius_multiplier),
            Stat::DotDuration => Some(&mut self.dot_duration_multiplier),
            Stat::Lifetime => Some(&mut self.lifetime_multiplier),
            Stat::Pierce | Stat::ExtraProjectiles | Stat::ExtraShots | Stat::Homing => None,
        }
    }
}

#[inline]
fn add_count(count: u32, amount: f32) -> u32 {
    count.saturating_add_signed(amount.round() as i32)
}

/// Player-side numbers innate abilities and passives write into.
///
/// Derived: rebuilt from [`BasePlayerStats`] plus gear whenever either changes. Hosts
/// that want a lasting change write the base, not this record.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct PlayerStats {
    pub max_health: f32,
    pub health_regen: f32,
    pub move_speed_multiplier: f32,
    pub pickup_radius: f32,
    pub xp_multiplier: f32,
    pub damage_reduction: f32,
    pub dodge_chance: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            health_regen: 0.0,
            move_speed_multiplier: 1.0,
            pickup_radius: 50.0,
            xp_multiplier: 1.0,
            damage_reduction: 0.0,
            dodge_chance: 0.0,
        }
    }
}

impl PlayerStats {
    pub const MAX_DAMAGE_REDUCTION: f32 = 0.75;
    pub const MAX_DODGE: f32 = 0.6;

    pub(crate) fn sanitize(&mut self) {
        self.max_health = self.max_health.max(1.0);
        self.damage_reduction = self.damage_reduction.clamp(0.0, Self::MAX_DAMAGE_REDUCTION);
        self.dodge_chance = self.dodge_chance.clamp(0.0, Self::MAX_DODGE);
    }
}

/// Player stats before any character or passive effect.
///
/// Owned by the host's player systems (skill trees, meta progression). Gear effects are
/// applied on top of a copy, so writes here survive every pickup and level-up.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct BasePlayerStats(pub PlayerStats);
