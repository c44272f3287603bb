//! Passive items. Each level applies independently of every other passive.

use super::stats::{ModifierSet, PlayerStats, Stat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassiveKind {
    /// +10% damage per level.
    Capacitor,
    /// ×(1 + 6%·level) fire rate.
    Overclock,
    /// +1 pierce at levels 1, 3 and 5.
    Drill,
    /// ×(1 + 10%·level) projectile speed.
    Thrusters,
    /// ×(1 + 10%·level) projectile size.
    Lens,
    /// +5% crit chance per level.
    Scope,
    /// +20% crit damage per level.
    Amplifier,
    /// ×(1 + 10%·level) explosion radius.
    Payload,
    /// +1 projectile at levels 1, 3 and 5.
    Multishot,
    /// +3% damage per level, one extra volley from level 3.
    Twinlink,
    /// ×(1 + 10%·level) DoT duration and projectile lifetime.
    Chronometer,
    /// Homing projectiles, +2% crit chance per level.
    Tracker,
    Magnet,
    Plating,
    Wings,
    Tome,
}

impl PassiveKind {
    pub const ALL: [PassiveKind; 16] = [
        PassiveKind::Capacitor,
        PassiveKind::Overclock,
        PassiveKind::Drill,
        PassiveKind::Thrusters,
        PassiveKind::Lens,
        PassiveKind::Scope,
        PassiveKind::Amplifier,
        PassiveKind::Payload,
        PassiveKind::Multishot,
        PassiveKind::Twinlink,
        PassiveKind::Chronometer,
        PassiveKind::Tracker,
        PassiveKind::Magnet,
        PassiveKind::Plating,
        PassiveKind::Wings,
        PassiveKind::Tome,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PassiveKind::Capacitor => "Capacitor",
            PassiveKind::Overclock => "Overclock",
            PassiveKind::Drill => "Drill Tips",
            PassiveKind::Thrusters => "Thrusters",
            PassiveKind::Lens => "Focusing Lens",
            PassiveKind::Scope => "Scope",
            PassiveKind::Amplifier => "Amplifier",
            PassiveKind::Payload => "Payload",
            PassiveKind::Multishot => "Multishot",
            PassiveKind::Twinlink => "Twinlink",
            PassiveKind::Chronometer => "Chronometer",
            PassiveKind::Tracker => "Tracker",
            PassiveKind::Magnet => "Magnet",
            PassiveKind::Plating => "Plating",
            PassiveKind::Wings => "Wings",
            PassiveKind::Tome => "Tome",
        }
    }

    /// Add this passive's contribution at `level`.
    pub fn apply(self, level: u8, mods: &mut ModifierSet, stats: &mut PlayerStats) {
        let l = level as f32;
        let steps = level.div_ceil(2) as f32;

        match self {
            PassiveKind::Capacitor => mods.apply(Stat::Damage, 0.1 * l),
            PassiveKind::Overclock => mods.apply(Stat::FireRate, 1.0 + 0.06 * l),
            PassiveKind::Drill => mods.apply(Stat::Pierce, steps),
            PassiveKind::Thrusters => mods.apply(Stat::ProjectileSpeed, 1.0 + 0.1 * l),
            PassiveKind::Lens => mods.apply(Stat::ProjectileSize, 1.0 + 0.1 * l),
            PassiveKind::Scope => mods.apply(Stat::CritChance, 0.05 * l),
            PassiveKind::Amplifier => mods.apply(Stat::CritDamage, 0.2 * l),
            PassiveKind::Payload => mods.apply(Stat::ExplosionRadius, 1.0 + 0.1 * l),
            PassiveKind::Multishot => mods.apply(Stat::ExtraProjectiles, steps),
            PassiveKind::Twinlink => {
                mods.apply(Stat::Damage, 0.03 * l);
                mods.apply(Stat::ExtraShots, (level / 3) as f32);
            }
            PassiveKind::Chronometer => {
                mods.apply(Stat::DotDuration, 1.0 + 0.1 * l);
                mods.apply(Stat::Lifetime, 1.0 + 0.1 * l);
            }
            PassiveKind::Tracker => {
                mods.apply(Stat::Homing, 1.0);
                mods.apply(Stat::CritChance, 0.02 * l);
            }
            PassiveKind::Magnet => stats.pickup_radius += 12.0 * l,
            PassiveKind::Plating => {
                stats.damage_reduction += 0.03 * l;
                stats.max_health += 10.0 * l;
            }
            PassiveKind::Wings => {
                stats.move_speed_multiplier *= 1.0 + 0.05 * l;
                stats.dodge_chance += 0.02 * l;
            }
            PassiveKind::Tome => stats.xp_multiplier += 0.08 * l,
        }
    }
}

/// A held passive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Passive {
    pub kind: PassiveKind,
    level: u8,
}

impl Passive {
    pub const MAX_LEVEL: u8 = 5;

    pub fn new(kind: PassiveKind) -> Self {
        Self { kind, level: 1 }
    }

    /// A passive at `level`, clamped to 1..=MAX_LEVEL.
    pub fn at_level(kind: PassiveKind, level: u8) -> Self {
        Self {
            kind,
            level: level.clamp(1, Self::MAX_LEVEL),
        }
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn is_maxed(&self) -> bool {
        self.level >= Self::MAX_LEVEL
    }

    pub fn level_up(&mut self) -> bool {
        if self.is_maxed() {
            return false;
        }
        self.level += 1;
        true
    }

    pub fn apply(&self, mods: &mut ModifierSet, stats: &mut PlayerStats) {
        self.kind.apply(self.level, mods, stats);
    }
}
