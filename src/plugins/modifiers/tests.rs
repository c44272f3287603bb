use bevy::prelude::*;

use super::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn fold(character: CharacterKind, passives: &[Passive], buildings: &BuildingBonuses) -> ModifierSet {
    let mut stats = PlayerStats::default();
    aggregate(character, passives, buildings, &PlayerStats::default(), &mut stats)
}

/// A character whose innate leaves the weapon-side fields we test at their neutral values.
const PLAIN: CharacterKind = CharacterKind::Scout;

// --------------------------------------------------------------------------------------
// Combination rules
// --------------------------------------------------------------------------------------

#[test]
fn defaults_are_neutral() {
    let mods = ModifierSet::default();
    assert_eq!(mods.damage_multiplier, 1.0);
    assert_eq!(mods.fire_rate_multiplier, 1.0);
    assert_eq!(mods.pierce, 0);
    assert_eq!(mods.extra_projectiles, 0);
    assert_eq!(mods.extra_shots, 0);
    assert!(!mods.homing);
}

#[test]
fn damage_contributions_add() {
    let mut mods = ModifierSet::default();
    mods.apply(Stat::Damage, 0.2);
    mods.apply(Stat::Damage, 0.2);
    assert!(approx(mods.damage_multiplier, 1.4));
}

#[test]
fn fire_rate_contributions_multiply() {
    let mut mods = ModifierSet::default();
    mods.apply(Stat::FireRate, 0.85);
    mods.apply(Stat::FireRate, 0.85);
    assert!(approx(mods.fire_rate_multiplier, 0.7225));
}

#[test]
fn count_contributions_round_and_never_go_negative() {
    let mut mods = ModifierSet::default();
    mods.apply(Stat::Pierce, 2.0);
    mods.apply(Stat::Pierce, -5.0);
    assert_eq!(mods.pierce, 0);

    mods.apply(Stat::ExtraProjectiles, 1.4);
    assert_eq!(mods.extra_projectiles, 1);
}

#[test]
fn homing_is_a_switch() {
    let mut mods = ModifierSet::default();
    mods.apply(Stat::Homing, 0.0);
    assert!(!mods.homing);
    mods.apply(Stat::Homing, 1.0);
    mods.apply(Stat::Homing, 0.0);
    assert!(mods.homing);
}

#[test]
fn stat_names_round_trip() {
    for stat in Stat::ALL {
        assert_eq!(Stat::from_name(stat.name()), Some(stat));
    }
    assert_eq!(Stat::from_name("luck"), None);
}

// --------------------------------------------------------------------------------------
// Aggregation
// --------------------------------------------------------------------------------------

#[test]
fn juggernaut_fires_slower_and_hits_harder() {
    let mut stats = PlayerStats::default();
    let mods = aggregate(
        CharacterKind::Juggernaut,
        &[],
        &BuildingBonuses::new(),
        &PlayerStats::default(),
        &mut stats,
    );

    assert!(approx(mods.fire_rate_multiplier, 0.85));
    assert!(approx(mods.damage_multiplier, 1.3));
    assert!(approx(stats.damage_reduction, 0.1));
}

#[test]
fn character_descriptions_match_fire_rate_sign() {
    for character in CharacterKind::ALL {
        let text = character.description();
        assert!(!text.is_empty(), "{character:?}");

        let rate = fold(character, &[], &BuildingBonuses::new()).fire_rate_multiplier;
        if rate < 1.0 {
            assert!(text.contains("-15% fire rate"), "{character:?}: {text}");
        } else if rate > 1.0 {
            assert!(text.contains("+15% fire rate"), "{character:?}: {text}");
        }
    }
}

#[test]
fn passive_order_does_not_matter() {
    let a = [
        Passive::at_level(PassiveKind::Overclock, 3),
        Passive::at_level(PassiveKind::Capacitor, 2),
        Passive::at_level(PassiveKind::Thrusters, 4),
    ];
    let b = [a[2], a[0], a[1]];

    let ma = fold(CharacterKind::Juggernaut, &a, &BuildingBonuses::new());
    let mb = fold(CharacterKind::Juggernaut, &b, &BuildingBonuses::new());

    assert!(approx(ma.damage_multiplier, mb.damage_multiplier));
    assert!(approx(ma.fire_rate_multiplier, mb.fire_rate_multiplier));
    assert!(approx(ma.speed_multiplier, mb.speed_multiplier));
}

#[test]
fn overclock_scales_with_level() {
    let mods = fold(PLAIN, &[Passive::at_level(PassiveKind::Overclock, 5)], &BuildingBonuses::new());
    assert!(approx(mods.fire_rate_multiplier, 1.3));
}

#[test]
fn drill_and_multishot_step_on_odd_levels() {
    let pierce = |level| {
        fold(PLAIN, &[Passive::at_level(PassiveKind::Drill, level)], &BuildingBonuses::new()).pierce
    };
    assert_eq!([pierce(1), pierce(2), pierce(3), pierce(5)], [1, 1, 2, 3]);

    let extra = |level| {
        fold(PLAIN, &[Passive::at_level(PassiveKind::Multishot, level)], &BuildingBonuses::new())
            .extra_projectiles
    };
    assert_eq!([extra(1), extra(4), extra(5)], [1, 2, 3]);
}

#[test]
fn building_bonus_adds_flat_onto_multiplier() {
    let buildings = BuildingBonuses::new().with(Stat::FireRate, 0.1);
    let mods = fold(PLAIN, &[Passive::at_level(PassiveKind::Overclock, 2)], &buildings);

    // 1.12 from the passive, then +0.1 flat.
    assert!(approx(mods.fire_rate_multiplier, 1.22));
}

#[test]
fn building_bonuses_stack_per_stat() {
    let mut buildings = BuildingBonuses::new();
    buildings.add(Stat::Damage, 0.05);
    buildings.add(Stat::Damage, 0.05);
    assert!(approx(buildings.get(Stat::Damage), 0.1));
    assert_eq!(buildings.get(Stat::Pierce), 0.0);
}

#[test]
fn building_bonuses_from_names_skip_unknown() {
    let buildings = BuildingBonuses::from_named([("damage", 0.1), ("charisma", 3.0), ("pierce", 1.0)]);
    let mods = fold(PLAIN, &[], &buildings);

    assert!(approx(mods.damage_multiplier, 1.1));
    assert_eq!(mods.pierce, 1);
}

#[test]
fn aggregate_resets_player_stats_to_base() {
    let base = PlayerStats::default();
    let mut stats = base;
    let plating = [Passive::at_level(PassiveKind::Plating, 5)];

    aggregate(CharacterKind::Pilot, &plating, &BuildingBonuses::new(), &base, &mut stats);
    let first = stats;
    aggregate(CharacterKind::Pilot, &plating, &BuildingBonuses::new(), &base, &mut stats);

    assert_eq!(first, stats);
    assert!(approx(stats.max_health, 150.0));
}

#[test]
fn gear_applies_on_top_of_base() {
    let base = PlayerStats {
        max_health: 250.0,
        pickup_radius: 80.0,
        ..default()
    };
    let mut stats = PlayerStats::default();
    let plating = [Passive::at_level(PassiveKind::Plating, 5)];

    aggregate(CharacterKind::Pilot, &plating, &BuildingBonuses::new(), &base, &mut stats);

    assert!(approx(stats.max_health, 300.0));
    // Pilot innate adds 10.
    assert!(approx(stats.pickup_radius, 90.0));
}

#[test]
fn player_stat_caps_hold() {
    let mut stats = PlayerStats::default();
    let passives = [
        Passive::at_level(PassiveKind::Plating, 5),
        Passive::at_level(PassiveKind::Wings, 5),
    ];
    for character in CharacterKind::ALL {
        let base = PlayerStats::default();
        aggregate(character, &passives, &BuildingBonuses::new(), &base, &mut stats);
        assert!(stats.damage_reduction <= PlayerStats::MAX_DAMAGE_REDUCTION);
        assert!(stats.dodge_chance <= PlayerStats::MAX_DODGE);
    }
}

#[test]
fn fire_rate_never_reaches_zero() {
    let buildings = BuildingBonuses::new().with(Stat::FireRate, -5.0);
    let mods = fold(PLAIN, &[], &buildings);
    assert!(mods.fire_rate_multiplier >= ModifierSet::MIN_FIRE_RATE);
}

#[test]
fn oracle_and_tracker_enable_homing() {
    assert!(fold(CharacterKind::Oracle, &[], &BuildingBonuses::new()).homing);
    assert!(fold(PLAIN, &[Passive::new(PassiveKind::Tracker)], &BuildingBonuses::new()).homing);
    assert!(!fold(PLAIN, &[], &BuildingBonuses::new()).homing);
}

// --------------------------------------------------------------------------------------
// Passive levels
// --------------------------------------------------------------------------------------

#[test]
fn passive_levels_cap_at_five() {
    let mut passive = Passive::new(PassiveKind::Lens);
    for _ in 0..4 {
        assert!(passive.level_up());
    }
    assert!(passive.is_maxed());
    assert!(!passive.level_up());
    assert_eq!(passive.level(), Passive::MAX_LEVEL);
}

#[test]
fn plugin_inserts_player_stats() {
    let mut app = App::new();
    plugin(&mut app);
    assert_eq!(*app.world().resource::<PlayerStats>(), PlayerStats::default());
    assert_eq!(**app.world().resource::<BasePlayerStats>(), PlayerStats::default());
}
