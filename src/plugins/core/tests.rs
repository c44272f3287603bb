use bevy::prelude::*;
use crate::plugins::core::{self, FieldBounds};
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::ProjectilesPlugin;
use crate::plugins::projectiles::pool::ProjectilePool;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<FieldBounds>().is_some());
}

#[test]
fn field_bounds_match_tunables() {
    let mut app = App::new();
    core::plugin(&mut app);

    let tunables = app.world().resource::<Tunables>().clone();
    let field = app.world().resource::<FieldBounds>();

    assert_eq!(field.width(), tunables.field_size.x);
    assert_eq!(field.height(), tunables.field_size.y);
    assert_eq!(field.center(), Vec2::ZERO);
}

#[test]
fn host_tunables_survive_registration() {
    let mut app = App::new();
    app.insert_resource(Tunables {
        pool_capacity: 64,
        field_size: Vec2::new(320.0, 640.0),
        ..default()
    });
    core::plugin(&mut app);
    app.add_plugins(ProjectilesPlugin);

    let world = app.world();
    assert_eq!(world.resource::<Tunables>().pool_capacity, 64);
    assert_eq!(world.resource::<ProjectilePool>().capacity(), 64);

    let field = world.resource::<FieldBounds>();
    assert_eq!(field.width(), 320.0);
    assert_eq!(field.height(), 640.0);
}
