use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::plugins::modifiers::{CharacterKind, Passive, PassiveKind};
use crate::plugins::weapons::kind::{BaseWeapon, EvolvedWeapon, SuperWeapon, WeaponKind};
use crate::plugins::weapons::{Loadout, Weapon};

use super::*;

fn maxed(kind: BaseWeapon) -> Weapon {
    let mut weapon = Weapon::base(kind);
    while weapon.level_up() {}
    weapon
}

fn maxed_passive(kind: PassiveKind) -> Passive {
    Passive::at_level(kind, Passive::MAX_LEVEL)
}

fn evolved(kind: EvolvedWeapon) -> Weapon {
    let recipe = EVOLUTIONS
        .iter()
        .find(|r| r.result == kind)
        .expect("every evolved weapon has a recipe");
    create_evolved_weapon(recipe)
}

// --------------------------------------------------------------------------------------
// Tables
// --------------------------------------------------------------------------------------

#[test]
fn every_base_weapon_has_one_evolution() {
    for base in BaseWeapon::ALL {
        let count = EVOLUTIONS.iter().filter(|r| r.base == base).count();
        assert_eq!(count, 1, "{base:?}");
    }
}

#[test]
fn recipe_configs_are_fixed_level() {
    assert!(EVOLUTIONS.iter().all(|r| r.config.max_level == 1));
    assert!(SUPER_EVOLUTIONS.iter().all(|r| r.config.max_level == 1));
}

#[test]
fn super_weapons_out_pierce_their_parts() {
    for recipe in &SUPER_EVOLUTIONS {
        if recipe.result == SuperWeapon::Judgement {
            // Beam; pierce is meaningless.
            continue;
        }
        let parts = [recipe.first, recipe.second].map(|kind| evolved(kind).config().bonus_pierce);
        assert!(recipe.config.bonus_pierce > parts[0].max(parts[1]), "{:?}", recipe.result);
    }
}

// --------------------------------------------------------------------------------------
// Evolution matching
// --------------------------------------------------------------------------------------

#[test]
fn evolution_needs_both_sides_maxed() {
    let weapons = [maxed(BaseWeapon::Blaster)];
    let passives = [maxed_passive(PassiveKind::Overclock)];

    let recipe = check_for_evolutions(&weapons, &passives).expect("tri-barrel recipe");
    assert_eq!(recipe.result, EvolvedWeapon::TriBarrel);
}

#[test]
fn evolution_with_only_weapon_maxed_is_none() {
    let weapons = [maxed(BaseWeapon::Blaster)];
    let passives = [Passive::at_level(PassiveKind::Overclock, 4)];
    assert!(check_for_evolutions(&weapons, &passives).is_none());
}

#[test]
fn evolution_with_only_passive_maxed_is_none() {
    let weapons = [Weapon::base(BaseWeapon::Blaster)];
    let passives = [maxed_passive(PassiveKind::Overclock)];
    assert!(check_for_evolutions(&weapons, &passives).is_none());
}

#[test]
fn evolution_with_wrong_passive_is_none() {
    let weapons = [maxed(BaseWeapon::Blaster)];
    let passives = [maxed_passive(PassiveKind::Lens)];
    assert!(check_for_evolutions(&weapons, &passives).is_none());
}

#[test]
fn first_recipe_in_table_order_wins() {
    // Halo and Blizzard both need Chronometer; Halo comes first in the table.
    let weapons = [maxed(BaseWeapon::Frost), maxed(BaseWeapon::Ring)];
    let passives = [maxed_passive(PassiveKind::Chronometer)];

    let recipe = check_for_evolutions(&weapons, &passives).expect("a match");
    assert_eq!(recipe.result, EvolvedWeapon::Halo);
}

#[test]
fn evolved_weapon_cannot_level() {
    let recipe = &EVOLUTIONS[0];
    let mut weapon = create_evolved_weapon(recipe);

    assert_eq!(weapon.kind(), WeaponKind::Evolved(recipe.result));
    assert!(weapon.is_evolved());
    assert!(!weapon.is_super());
    assert_eq!(weapon.level(), 1);
    assert!(weapon.is_max_level());
    assert!(!weapon.level_up());
}

// --------------------------------------------------------------------------------------
// Super evolution matching
// --------------------------------------------------------------------------------------

#[test]
fn super_evolution_matches_exact_pair_in_any_order() {
    let weapons = [evolved(EvolvedWeapon::Tempest), evolved(EvolvedWeapon::TriBarrel)];
    let recipe = check_for_super_evolutions(&weapons).expect("armageddon");
    assert_eq!(recipe.result, SuperWeapon::Armageddon);
}

#[test]
fn super_evolution_with_one_evolved_is_none() {
    let weapons = [evolved(EvolvedWeapon::TriBarrel), maxed(BaseWeapon::Scatter)];
    assert!(check_for_super_evolutions(&weapons).is_none());
}

#[test]
fn super_evolution_with_unmatched_pair_is_none() {
    let weapons = [evolved(EvolvedWeapon::TriBarrel), evolved(EvolvedWeapon::Pinball)];
    assert!(check_for_super_evolutions(&weapons).is_none());
}

#[test]
fn super_weapon_cannot_level() {
    let mut weapon = create_super_evolved_weapon(&SUPER_EVOLUTIONS[0]);
    assert!(weapon.is_super());
    assert!(!weapon.is_evolved());
    assert!(!weapon.level_up());
}

// --------------------------------------------------------------------------------------
// Hints
// --------------------------------------------------------------------------------------

#[test]
fn hints_cover_held_base_weapons_only() {
    let weapons = [maxed(BaseWeapon::Blaster), Weapon::base(BaseWeapon::Laser)];
    let passives = [Passive::new(PassiveKind::Overclock)];

    let hints = evolution_hints(&weapons, &passives);
    assert_eq!(hints.len(), 2);

    let tri = hints
        .iter()
        .find(|h| h.recipe.result == EvolvedWeapon::TriBarrel)
        .expect("blaster hint");
    assert!(tri.weapon_maxed);
    assert!(tri.passive_held);
    assert!(!tri.passive_maxed);
    assert!(!tri.is_ready());

    let prism = hints
        .iter()
        .find(|h| h.recipe.result == EvolvedWeapon::Prism)
        .expect("laser hint");
    assert!(!prism.passive_held);
}

// --------------------------------------------------------------------------------------
// Splicing into a loadout
// --------------------------------------------------------------------------------------

#[test]
fn apply_evolution_replaces_in_place() {
    let mut loadout = Loadout::new(CharacterKind::Pilot);
    loadout.add_weapon(BaseWeapon::Rocket);
    loadout.weapons[0] = maxed(BaseWeapon::Blaster);

    assert!(loadout.apply_evolution(&EVOLUTIONS[0]));
    assert_eq!(loadout.weapons.len(), 2);
    assert_eq!(loadout.weapons[0].kind(), WeaponKind::Evolved(EvolvedWeapon::TriBarrel));
    assert_eq!(loadout.weapons[1].kind(), WeaponKind::Base(BaseWeapon::Rocket));
}

#[test]
fn apply_evolution_without_maxed_weapon_fails() {
    let mut loadout = Loadout::new(CharacterKind::Pilot);
    assert!(!loadout.apply_evolution(&EVOLUTIONS[0]));
    assert_eq!(loadout.weapons[0].kind(), WeaponKind::Base(BaseWeapon::Blaster));
}

#[test]
fn apply_super_evolution_merges_two_slots() {
    let mut loadout = Loadout::new(CharacterKind::Pilot);
    loadout.weapons = vec![
        evolved(EvolvedWeapon::Tempest),
        Weapon::base(BaseWeapon::Frost),
        evolved(EvolvedWeapon::TriBarrel),
    ];

    let recipe = check_for_super_evolutions(&loadout.weapons).expect("armageddon");
    assert!(loadout.apply_super_evolution(recipe));

    let kinds: Vec<_> = loadout.weapons.iter().map(Weapon::kind).collect();
    assert_eq!(
        kinds,
        vec![
            WeaponKind::Super(SuperWeapon::Armageddon),
            WeaponKind::Base(BaseWeapon::Frost),
        ]
    );
}

// --------------------------------------------------------------------------------------
// System
// --------------------------------------------------------------------------------------

#[test]
fn announce_evolutions_writes_ready_messages() {
    let mut world = World::new();
    world.init_resource::<Messages<EvolutionReady>>();
    world.init_resource::<Messages<SuperEvolutionReady>>();

    let mut loadout = Loadout::new(CharacterKind::Pilot);
    loadout.weapons[0] = maxed(BaseWeapon::Blaster);
    loadout.passives.push(maxed_passive(PassiveKind::Overclock));
    world.insert_resource(loadout);

    run_system_once(&mut world, announce_evolutions);

    let ready = world.resource::<Messages<EvolutionReady>>();
    assert_eq!(ready.len(), 1);
    assert!(world.resource::<Messages<SuperEvolutionReady>>().is_empty());
}
