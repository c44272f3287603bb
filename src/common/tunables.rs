//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Fixed number of projectile slots.
    pub pool_capacity: usize,
    /// Playfield size in world units, centered on the origin.
    pub field_size: Vec2,
    /// How far homing projectiles look for a target.
    pub homing_range: f32,
    /// Pool usage ratio that raises a warning.
    pub pool_warn_ratio: f32,
    /// Pool usage ratio that raises an error (sustained usage here usually means a leak).
    pub pool_critical_ratio: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pool_capacity: 500,
            field_size: Vec2::new(480.0, 800.0),
            homing_range: 600.0,
            pool_warn_ratio: 0.8,
            pool_critical_ratio: 0.9,
        }
    }
}

impl Tunables {
    #[inline]
    pub fn field_rect(&self) -> Rect {
        Rect::from_center_size(Vec2::ZERO, self.field_size)
    }
}
