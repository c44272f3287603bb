use super::stats::{ModifierSet, PlayerStats, Stat};

/// Playable characters. Each one has an innate ability that feeds both the weapon snapshot
/// and the player-stat record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    #[default]
    Pilot,
    Gunner,
    Juggernaut,
    Scout,
    Engineer,
    Oracle,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 6] = [
        CharacterKind::Pilot,
        CharacterKind::Gunner,
        CharacterKind::Juggernaut,
        CharacterKind::Scout,
        CharacterKind::Engineer,
        CharacterKind::Oracle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharacterKind::Pilot => "Pilot",
            CharacterKind::Gunner => "Gunner",
            CharacterKind::Juggernaut => "Juggernaut",
            CharacterKind::Scout => "Scout",
            CharacterKind::Engineer => "Engineer",
            CharacterKind::Oracle => "Oracle",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CharacterKind::Pilot => "+5% damage, wider pickup range.",
            CharacterKind::Gunner => "+15% fire rate and one extra projectile, less health.",
            CharacterKind::Juggernaut => "+30% damage and 10% damage reduction, but -15% fire rate.",
            CharacterKind::Scout => "Faster projectiles, faster movement, 10% dodge.",
            CharacterKind::Engineer => "Bigger explosions, longer-lasting zones, wider pickup range.",
            CharacterKind::Oracle => "Projectiles seek targets. +10% crit chance, +20% XP.",
        }
    }

    pub fn apply_innate(self, mods: &mut ModifierSet, stats: &mut PlayerStats) {
        match self {
            CharacterKind::Pilot => {
                mods.apply(Stat::Damage, 0.05);
                stats.pickup_radius += 10.0;
            }
            CharacterKind::Gunner => {
                mods.apply(Stat::FireRate, 1.15);
                mods.apply(Stat::ExtraProjectiles, 1.0);
                stats.max_health -= 10.0;
            }
            CharacterKind::Juggernaut => {
                mods.apply(Stat::FireRate, 0.85);
                mods.apply(Stat::Damage, 0.3);
                stats.damage_reduction += 0.1;
                stats.max_health += 40.0;
                stats.move_speed_multiplier *= 0.9;
            }
            CharacterKind::Scout => {
                mods.apply(Stat::ProjectileSpeed, 1.2);
                stats.dodge_chance += 0.1;
                stats.move_speed_multiplier *= 1.15;
            }
            CharacterKind::Engineer => {
                mods.apply(Stat::ExplosionRadius, 1.25);
                mods.apply(Stat::Lifetime, 1.2);
                stats.pickup_radius += 30.0;
            }
            CharacterKind::Oracle => {
                mods.apply(Stat::Homing, 1.0);
                mods.apply(Stat::CritChance, 0.1);
                stats.xp_multiplier += 0.2;
            }
        }
    }
}
