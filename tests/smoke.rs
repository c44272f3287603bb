mod common;

use bevy::prelude::*;
use volley::common::tunables::Tunables;
use volley::plugins::core::FieldBounds;
use volley::plugins::modifiers::{BasePlayerStats, PassiveKind, PlayerStats};
use volley::plugins::projectiles::pool::ProjectilePool;
use volley::plugins::weapons::{FireOrigin, Loadout};

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn gameplay_resources_are_installed() {
    let app = common::app_headless();
    let world = app.world();

    assert!(world.contains_resource::<Tunables>());
    assert!(world.contains_resource::<FieldBounds>());
    assert!(world.contains_resource::<PlayerStats>());
    assert!(world.contains_resource::<Loadout>());
    assert!(world.contains_resource::<FireOrigin>());

    let pool = world.resource::<ProjectilePool>();
    assert_eq!(pool.capacity(), Tunables::default().pool_capacity);
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn no_fire_origin_means_no_projectiles() {
    let mut app = common::app_headless();

    for _ in 0..10 {
        common::step_fixed(&mut app, 100);
    }

    assert_eq!(app.world().resource::<ProjectilePool>().active_count(), 0);
}

#[test]
fn host_tunables_size_the_pool() {
    let app = common::app_headless_with(Tunables {
        pool_capacity: 64,
        ..default()
    });

    assert_eq!(app.world().resource::<ProjectilePool>().capacity(), 64);
}

#[test]
fn base_stats_outlive_loadout_changes() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut().resource_mut::<BasePlayerStats>().max_health = 250.0;
    app.update();
    assert_eq!(app.world().resource::<PlayerStats>().max_health, 250.0);

    app.world_mut()
        .resource_mut::<Loadout>()
        .add_passive(PassiveKind::Magnet);
    app.update();

    let stats = app.world().resource::<PlayerStats>();
    assert_eq!(stats.max_health, 250.0);
    // Base 50, Pilot +10, Magnet level 1 +12.
    assert_eq!(stats.pickup_radius, 72.0);
}
