//! End-to-end combat ticks on a headless app: fire → move → collide, and evolution.

mod common;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use volley::plugins::evolution::{EvolutionReady, check_for_evolutions};
use volley::plugins::modifiers::PassiveKind;
use volley::plugins::projectiles::components::{Enemy, ProjectileHandle};
use volley::plugins::projectiles::messages::ProjectileHit;
use volley::plugins::projectiles::pool::ProjectilePool;
use volley::plugins::weapons::{
    BaseWeapon, EvolvedWeapon, FireOrigin, LaserFired, Loadout, Weapon, WeaponKind,
};

fn armed_app() -> App {
    let mut app = common::app_headless();
    app.world_mut().resource_mut::<FireOrigin>().position = Some(Vec2::new(0.0, -300.0));
    app
}

fn active(app: &App) -> usize {
    app.world().resource::<ProjectilePool>().active_count()
}

fn first_handle(app: &App) -> ProjectileHandle {
    app.world()
        .resource::<ProjectilePool>()
        .iter_active()
        .map(|(h, _)| h)
        .next()
        .expect("an active projectile")
}

fn hit(app: &mut App, projectile: ProjectileHandle) {
    let target = app.world_mut().spawn(Enemy).id();
    app.world_mut()
        .write_message(ProjectileHit { projectile, target });
}

#[test]
fn starting_weapon_fires_on_its_interval() {
    let mut app = armed_app();

    common::step_fixed(&mut app, 399);
    assert_eq!(active(&app), 0);

    common::step_fixed(&mut app, 1);
    assert_eq!(active(&app), 1);

    common::step_fixed(&mut app, 400);
    assert_eq!(active(&app), 2);
}

#[test]
fn hit_without_pierce_recycles_the_projectile() {
    let mut app = armed_app();
    common::step_fixed(&mut app, 400);
    let bolt = first_handle(&app);

    hit(&mut app, bolt);
    common::step_fixed(&mut app, 1);

    assert_eq!(active(&app), 0);
}

#[test]
fn drill_lets_a_bolt_survive_one_hit() {
    let mut app = armed_app();
    app.world_mut()
        .resource_mut::<Loadout>()
        .add_passive(PassiveKind::Drill);

    common::step_fixed(&mut app, 400);
    let bolt = first_handle(&app);

    hit(&mut app, bolt);
    common::step_fixed(&mut app, 1);
    assert_eq!(active(&app), 1);

    hit(&mut app, bolt);
    common::step_fixed(&mut app, 1);
    assert_eq!(active(&app), 0);
}

#[test]
fn bolts_leaving_the_field_are_recycled() {
    let mut app = armed_app();
    common::step_fixed(&mut app, 400);
    assert_eq!(active(&app), 1);

    app.world_mut().resource_mut::<FireOrigin>().position = None;
    // 600 px/s for 2 s covers the whole 800 px field.
    for _ in 0..20 {
        common::step_fixed(&mut app, 100);
    }

    assert_eq!(active(&app), 0);
}

#[test]
fn laser_shot_is_reported_as_a_message() {
    let mut app = armed_app();
    app.world_mut().resource_mut::<Loadout>().weapons = vec![Weapon::base(BaseWeapon::Laser)];

    common::step_fixed(&mut app, 150);

    assert_eq!(active(&app), 0);
    assert_eq!(app.world().resource::<Messages<LaserFired>>().len(), 1);
}

#[test]
fn evolution_is_announced_and_applied() {
    let mut app = armed_app();
    app.world_mut().run_schedule(Update);

    {
        let mut loadout = app.world_mut().resource_mut::<Loadout>();
        while loadout.level_up_weapon(BaseWeapon::Blaster) {}
        loadout.add_passive(PassiveKind::Overclock);
        while loadout.level_up_passive(PassiveKind::Overclock) {}
    }
    app.world_mut().run_schedule(Update);
    assert_eq!(app.world().resource::<Messages<EvolutionReady>>().len(), 1);

    let recipe = {
        let loadout = app.world().resource::<Loadout>();
        check_for_evolutions(&loadout.weapons, &loadout.passives).expect("tri-barrel ready")
    };
    assert!(app.world_mut().resource_mut::<Loadout>().apply_evolution(recipe));

    // Nothing left to evolve.
    app.world_mut().run_schedule(Update);
    assert_eq!(app.world().resource::<Messages<EvolutionReady>>().len(), 1);

    let loadout = app.world().resource::<Loadout>();
    assert_eq!(loadout.weapons[0].kind(), WeaponKind::Evolved(EvolvedWeapon::TriBarrel));

    common::step_fixed(&mut app, 300);
    assert_eq!(active(&app), 3);
}
