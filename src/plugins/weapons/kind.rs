//! Weapon kinds and their static configuration.

use crate::plugins::projectiles::components::DamageCategory;

/// Weapons that can be picked up and levelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseWeapon {
    Blaster,
    Scatter,
    Rocket,
    Frost,
    Tesla,
    Ricochet,
    Wave,
    Trap,
    Seeker,
    Vortex,
    Ring,
    Laser,
}

/// Results of an evolution. Always at their single fixed level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EvolvedWeapon {
    TriBarrel,
    DroneHive,
    Tempest,
    Halo,
    Maelstrom,
    Warhead,
    Blizzard,
    StormCoil,
    Prism,
    Pinball,
    Tsunami,
    Minefield,
}

/// Results of combining two evolved weapons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuperWeapon {
    Armageddon,
    Singularity,
    Cataclysm,
    Judgement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    Base(BaseWeapon),
    Evolved(EvolvedWeapon),
    Super(SuperWeapon),
}

impl WeaponKind {
    /// Beam weapons report a `LaserFired` instead of allocating projectiles.
    pub fn is_beam(self) -> bool {
        matches!(
            self,
            WeaponKind::Base(BaseWeapon::Laser)
                | WeaponKind::Evolved(EvolvedWeapon::Prism)
                | WeaponKind::Super(SuperWeapon::Judgement)
        )
    }

    /// Beam weapons that build heat. Judgement is exempt.
    pub fn overheats(self) -> bool {
        matches!(
            self,
            WeaponKind::Base(BaseWeapon::Laser) | WeaponKind::Evolved(EvolvedWeapon::Prism)
        )
    }

    /// Weapons whose pattern turns a little every volley.
    pub fn rotates(self) -> bool {
        matches!(
            self,
            WeaponKind::Evolved(EvolvedWeapon::Halo | EvolvedWeapon::Maelstrom)
                | WeaponKind::Super(SuperWeapon::Singularity)
        )
    }
}

impl From<BaseWeapon> for WeaponKind {
    fn from(kind: BaseWeapon) -> Self {
        WeaponKind::Base(kind)
    }
}

impl From<EvolvedWeapon> for WeaponKind {
    fn from(kind: EvolvedWeapon) -> Self {
        WeaponKind::Evolved(kind)
    }
}

impl From<SuperWeapon> for WeaponKind {
    fn from(kind: SuperWeapon) -> Self {
        WeaponKind::Super(kind)
    }
}

/// Static, data-only weapon description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponConfig {
    pub name: &'static str,
    pub description: &'static str,
    /// Asset key for the level-up card; resolved by the UI.
    pub icon: &'static str,
    pub base_damage: i32,
    pub fire_interval_ms: u32,
    pub category: DamageCategory,
    pub max_level: u8,
    pub projectile_speed: f32,
    /// Pierce every projectile of this weapon starts with, before modifiers.
    pub bonus_pierce: u32,
}

impl BaseWeapon {
    pub const MAX_LEVEL: u8 = 8;

    pub const ALL: [BaseWeapon; 12] = [
        BaseWeapon::Blaster,
        BaseWeapon::Scatter,
        BaseWeapon::Rocket,
        BaseWeapon::Frost,
        BaseWeapon::Tesla,
        BaseWeapon::Ricochet,
        BaseWeapon::Wave,
        BaseWeapon::Trap,
        BaseWeapon::Seeker,
        BaseWeapon::Vortex,
        BaseWeapon::Ring,
        BaseWeapon::Laser,
    ];

    pub const fn config(self) -> WeaponConfig {
        use DamageCategory::*;

        let (name, description, icon, base_damage, fire_interval_ms, category, speed, pierce) =
            match self {
                BaseWeapon::Blaster => (
                    "Blaster",
                    "Fires a straight bolt.",
                    "weapon_blaster",
                    10,
                    400,
                    Kinetic,
                    600.0,
                    0,
                ),
                BaseWeapon::Scatter => (
                    "Scatter Gun",
                    "Fires a fan of pellets.",
                    "weapon_scatter",
                    6,
                    700,
                    Kinetic,
                    550.0,
                    0,
                ),
                BaseWeapon::Rocket => (
                    "Rocket Pod",
                    "Slow rockets that explode on impact.",
                    "weapon_rocket",
                    22,
                    1200,
                    Explosive,
                    380.0,
                    0,
                ),
                BaseWeapon::Frost => (
                    "Frost Shard",
                    "Shards that may freeze what they hit.",
                    "weapon_frost",
                    8,
                    600,
                    Frost,
                    500.0,
                    0,
                ),
                BaseWeapon::Tesla => (
                    "Tesla Coil",
                    "Bolts that arc to nearby enemies.",
                    "weapon_tesla",
                    9,
                    800,
                    Electric,
                    650.0,
                    0,
                ),
                BaseWeapon::Ricochet => (
                    "Ricochet",
                    "Discs that bounce off the walls and speed up.",
                    "weapon_ricochet",
                    7,
                    900,
                    Kinetic,
                    450.0,
                    1,
                ),
                BaseWeapon::Wave => (
                    "Wave Emitter",
                    "Weaving shots that cover a wide lane.",
                    "weapon_wave",
                    8,
                    650,
                    Energy,
                    420.0,
                    1,
                ),
                BaseWeapon::Trap => (
                    "Spike Trap",
                    "Raises spikes ahead of the ship.",
                    "weapon_trap",
                    5,
                    1800,
                    Earth,
                    0.0,
                    99,
                ),
                BaseWeapon::Seeker => (
                    "Seeker",
                    "Missiles that home in on the nearest enemy.",
                    "weapon_seeker",
                    11,
                    1000,
                    Explosive,
                    400.0,
                    0,
                ),
                BaseWeapon::Vortex => (
                    "Vortex",
                    "Twin shots that curl outward.",
                    "weapon_vortex",
                    7,
                    750,
                    Void,
                    420.0,
                    1,
                ),
                BaseWeapon::Ring => (
                    "Ring Burst",
                    "A ring of shots that fades at a fixed radius.",
                    "weapon_ring",
                    6,
                    1400,
                    Energy,
                    300.0,
                    2,
                ),
                BaseWeapon::Laser => (
                    "Laser",
                    "A piercing beam. Overheats under sustained fire.",
                    "weapon_laser",
                    4,
                    150,
                    Energy,
                    0.0,
                    0,
                ),
            };

        WeaponConfig {
            name,
            description,
            icon,
            base_damage,
            fire_interval_ms,
            category,
            max_level: Self::MAX_LEVEL,
            projectile_speed: speed,
            bonus_pierce: pierce,
        }
    }
}
