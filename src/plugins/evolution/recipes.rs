//! Fixed recipe tables. Order matters: the first match wins.

use crate::plugins::modifiers::PassiveKind;
use crate::plugins::projectiles::components::DamageCategory;
use crate::plugins::weapons::kind::{BaseWeapon, EvolvedWeapon, SuperWeapon, WeaponConfig};

/// Max-level base weapon + max-level passive → evolved weapon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvolutionRecipe {
    pub base: BaseWeapon,
    pub passive: PassiveKind,
    pub result: EvolvedWeapon,
    pub config: WeaponConfig,
}

/// Two evolved weapons held together → super weapon. Pair order is irrelevant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuperEvolutionRecipe {
    pub first: EvolvedWeapon,
    pub second: EvolvedWeapon,
    pub result: SuperWeapon,
    pub config: WeaponConfig,
}

#[allow(clippy::too_many_arguments)]
const fn fixed(
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    base_damage: i32,
    fire_interval_ms: u32,
    category: DamageCategory,
    projectile_speed: f32,
    bonus_pierce: u32,
) -> WeaponConfig {
    WeaponConfig {
        name,
        description,
        icon,
        base_damage,
        fire_interval_ms,
        category,
        max_level: 1,
        projectile_speed,
        bonus_pierce,
    }
}

const fn evolution(
    base: BaseWeapon,
    passive: PassiveKind,
    result: EvolvedWeapon,
    config: WeaponConfig,
) -> EvolutionRecipe {
    EvolutionRecipe {
        base,
        passive,
        result,
        config,
    }
}

pub static EVOLUTIONS: [EvolutionRecipe; 12] = [
    evolution(
        BaseWeapon::Blaster,
        PassiveKind::Overclock,
        EvolvedWeapon::TriBarrel,
        fixed(
            "Tri-Barrel",
            "Three parallel barrels of piercing bolts.",
            "evo_tri_barrel",
            24,
            300,
            DamageCategory::Kinetic,
            700.0,
            2,
        ),
    ),
    evolution(
        BaseWeapon::Seeker,
        PassiveKind::Tracker,
        EvolvedWeapon::DroneHive,
        fixed(
            "Drone Hive",
            "Releases a ring of hunting drones.",
            "evo_drone_hive",
            20,
            1100,
            DamageCategory::Explosive,
            420.0,
            1,
        ),
    ),
    evolution(
        BaseWeapon::Scatter,
        PassiveKind::Multishot,
        EvolvedWeapon::Tempest,
        fixed(
            "Tempest",
            "A spread that spans the whole screen.",
            "evo_tempest",
            14,
            650,
            DamageCategory::Kinetic,
            600.0,
            1,
        ),
    ),
    evolution(
        BaseWeapon::Ring,
        PassiveKind::Chronometer,
        EvolvedWeapon::Halo,
        fixed(
            "Halo",
            "A rotating ring of light around the ship.",
            "evo_halo",
            14,
            900,
            DamageCategory::Energy,
            320.0,
            4,
        ),
    ),
    evolution(
        BaseWeapon::Vortex,
        PassiveKind::Thrusters,
        EvolvedWeapon::Maelstrom,
        fixed(
            "Maelstrom",
            "Turning spirals in every direction.",
            "evo_maelstrom",
            16,
            700,
            DamageCategory::Void,
            450.0,
            3,
        ),
    ),
    evolution(
        BaseWeapon::Rocket,
        PassiveKind::Payload,
        EvolvedWeapon::Warhead,
        fixed(
            "Warhead",
            "Heavy rockets with huge blasts.",
            "evo_warhead",
            55,
            1100,
            DamageCategory::Explosive,
            420.0,
            1,
        ),
    ),
    evolution(
        BaseWeapon::Frost,
        PassiveKind::Chronometer,
        EvolvedWeapon::Blizzard,
        fixed(
            "Blizzard",
            "A wide storm of freezing shards.",
            "evo_blizzard",
            16,
            550,
            DamageCategory::Frost,
            520.0,
            2,
        ),
    ),
    evolution(
        BaseWeapon::Tesla,
        PassiveKind::Scope,
        EvolvedWeapon::StormCoil,
        fixed(
            "Storm Coil",
            "Bolts that arc through whole packs.",
            "evo_storm_coil",
            20,
            700,
            DamageCategory::Electric,
            700.0,
            2,
        ),
    ),
    evolution(
        BaseWeapon::Laser,
        PassiveKind::Capacitor,
        EvolvedWeapon::Prism,
        fixed(
            "Prism",
            "Splits the beam three ways.",
            "evo_prism",
            9,
            130,
            DamageCategory::Energy,
            0.0,
            0,
        ),
    ),
    evolution(
        BaseWeapon::Ricochet,
        PassiveKind::Drill,
        EvolvedWeapon::Pinball,
        fixed(
            "Pinball",
            "Discs that never stop bouncing.",
            "evo_pinball",
            16,
            800,
            DamageCategory::Kinetic,
            480.0,
            3,
        ),
    ),
    evolution(
        BaseWeapon::Wave,
        PassiveKind::Lens,
        EvolvedWeapon::Tsunami,
        fixed(
            "Tsunami",
            "A wall of wide, weaving shots.",
            "evo_tsunami",
            15,
            600,
            DamageCategory::Energy,
            440.0,
            3,
        ),
    ),
    evolution(
        BaseWeapon::Trap,
        PassiveKind::Plating,
        EvolvedWeapon::Minefield,
        fixed(
            "Minefield",
            "Seeds the lane ahead with spike fields.",
            "evo_minefield",
            12,
            2000,
            DamageCategory::Earth,
            0.0,
            99,
        ),
    ),
];

pub static SUPER_EVOLUTIONS: [SuperEvolutionRecipe; 4] = [
    SuperEvolutionRecipe {
        first: EvolvedWeapon::TriBarrel,
        second: EvolvedWeapon::Tempest,
        result: SuperWeapon::Armageddon,
        config: fixed(
            "Armageddon",
            "A half-circle of explosive rounds.",
            "super_armageddon",
            40,
            500,
            DamageCategory::Explosive,
            700.0,
            5,
        ),
    },
    SuperEvolutionRecipe {
        first: EvolvedWeapon::DroneHive,
        second: EvolvedWeapon::Halo,
        result: SuperWeapon::Singularity,
        config: fixed(
            "Singularity",
            "A turning ring wrapped around a swarm of drones.",
            "super_singularity",
            30,
            800,
            DamageCategory::Void,
            380.0,
            6,
        ),
    },
    SuperEvolutionRecipe {
        first: EvolvedWeapon::Warhead,
        second: EvolvedWeapon::Blizzard,
        result: SuperWeapon::Cataclysm,
        config: fixed(
            "Cataclysm",
            "Alternating rings of fire and ice.",
            "super_cataclysm",
            60,
            1000,
            DamageCategory::Explosive,
            450.0,
            5,
        ),
    },
    SuperEvolutionRecipe {
        first: EvolvedWeapon::Prism,
        second: EvolvedWeapon::StormCoil,
        result: SuperWeapon::Judgement,
        config: fixed(
            "Judgement",
            "Six beams that never overheat.",
            "super_judgement",
            22,
            120,
            DamageCategory::Electric,
            0.0,
            0,
        ),
    },
];
