use bevy::prelude::*;

/// One beam shot, for the external hit-scan resolver.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct LaserFired {
    pub origin: Vec2,
    pub damage: i32,
    /// Parallel beams in this shot.
    pub beam_count: u32,
    pub max_range: f32,
    pub color: Color,
}
