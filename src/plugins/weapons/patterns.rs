//! Per-kind fire procedures.
//!
//! A pattern describes one volley in base terms (count, layout, behavior). [`Emitter`] applies
//! the modifier snapshot to every request on its way to the pool, so patterns never read
//! multipliers themselves. Extra shots repeat the whole volley side by side.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::plugins::modifiers::ModifierSet;
use crate::plugins::projectiles::components::{Behavior, DamageCategory, Hand, SpawnProjectile};
use crate::plugins::projectiles::pool::{ProjectilePool, ring_directions, spread_directions};

use super::kind::{BaseWeapon, EvolvedWeapon, SuperWeapon, WeaponKind};
use super::messages::LaserFired;

/// Lateral gap between repeated volleys.
pub const SHOT_SPACING: f32 = 14.0;
/// Turn rate given to plain shots when the snapshot enables homing.
pub const HOMING_TURN_RATE: f32 = 0.08;
/// How far ahead of the ship traps are placed.
pub const TRAP_REACH: f32 = 120.0;
/// Radians a rotating pattern turns per volley.
pub const ROTATION_STEP: f32 = 0.35;

/// Everything a pattern needs about the shot, already scaled by weapon level and modifiers.
#[derive(Clone, Copy, Debug)]
pub struct ShotStats {
    pub damage: i32,
    pub pierce: u32,
    pub speed: f32,
    pub level: u8,
    pub extra: usize,
    pub category: DamageCategory,
}

/// Where and into what a volley is fired.
pub struct FireTarget<'a> {
    pub origin: Vec2,
    pub field: Rect,
    pub modifiers: &'a ModifierSet,
}

pub(crate) struct Emitter<'p> {
    pool: &'p mut ProjectilePool,
    modifiers: ModifierSet,
    pub(crate) spawned: usize,
}

impl<'p> Emitter<'p> {
    pub(crate) fn new(pool: &'p mut ProjectilePool, modifiers: &ModifierSet) -> Self {
        Self {
            pool,
            modifiers: *modifiers,
            spawned: 0,
        }
    }

    /// Scale behavior parameters by the snapshot. Plain shots turn homing when enabled.
    fn adjust(&self, mut spawn: SpawnProjectile) -> SpawnProjectile {
        let m = &self.modifiers;
        spawn.size *= m.size_multiplier;
        spawn.behavior = match spawn.behavior {
            Behavior::Plain if m.homing => Behavior::Homing {
                turn_rate: HOMING_TURN_RATE,
                speed: spawn.velocity.length(),
            },
            Behavior::Explosive { radius } => Behavior::Explosive {
                radius: radius * m.explosion_radius_multiplier,
            },
            Behavior::Freezing { chance, duration_ms } => Behavior::Freezing {
                chance,
                duration_ms: scale_ms(duration_ms, m.dot_duration_multiplier),
            },
            Behavior::Zone { duration_ms, radius } => Behavior::Zone {
                duration_ms: scale_ms(duration_ms, m.lifetime_multiplier),
                radius: radius * m.size_multiplier,
            },
            other => other,
        };
        if let Some(orbit) = spawn.orbit.as_mut() {
            orbit.max_distance *= m.lifetime_multiplier;
        }
        spawn
    }

    pub(crate) fn emit(&mut self, spawn: SpawnProjectile) {
        let spawn = self.adjust(spawn);
        if self.pool.allocate(&spawn).is_some() {
            self.spawned += 1;
        }
    }

    /// Fan centred on straight up, through the pool's spread helper.
    pub(crate) fn fan(&mut self, template: SpawnProjectile, count: usize, spread_degrees: f32) {
        let speed = template.velocity.length();
        let template = self.adjust(template);
        self.spawned += self
            .pool
            .fire_spread_with(&template, count, spread_degrees, speed);
    }

    /// Parallel shots side by side.
    pub(crate) fn line(&mut self, template: SpawnProjectile, count: usize, spacing: f32) {
        for offset in lateral_offsets(count, spacing) {
            let position = template.position + Vec2::X * offset;
            self.emit(template.at(position, template.velocity));
        }
    }

    /// Evenly around a circle, starting `offset` radians from straight up.
    pub(crate) fn ring(&mut self, template: SpawnProjectile, count: usize, offset: f32) {
        let speed = template.velocity.length();
        for dir in ring_directions(count, offset) {
            self.emit(template.at(template.position, dir * speed));
        }
    }
}

#[inline]
fn scale_ms(ms: u32, factor: f32) -> u32 {
    (ms as f32 * factor.max(0.0)).round() as u32
}

/// Offsets for `count` items centred on zero, `spacing` apart.
pub fn lateral_offsets(count: usize, spacing: f32) -> impl Iterator<Item = f32> {
    let half = count.saturating_sub(1) as f32 * 0.5;
    (0..count).map(move |i| (i as f32 - half) * spacing)
}

/// Fire one weapon's volley (and its extra-shot copies).
///
/// `angle` is the rotation state of rotating patterns; it is advanced once per call.
pub(crate) fn fire_volley(
    kind: WeaponKind,
    shot: &ShotStats,
    angle: &mut f32,
    target: &FireTarget<'_>,
    pool: &mut ProjectilePool,
) -> (usize, Option<LaserFired>) {
    if kind.is_beam() {
        return (0, Some(beam(kind, shot, target)));
    }

    let copies = 1 + target.modifiers.extra_shots as usize;
    let mut emitter = Emitter::new(pool, target.modifiers);

    for offset in lateral_offsets(copies, SHOT_SPACING) {
        let origin = target.origin + Vec2::X * offset;
        let template = SpawnProjectile::new(origin, Vec2::Y * shot.speed, shot.damage)
            .with_pierce(shot.pierce)
            .with_category(shot.category);
        pattern(kind, shot, *angle, origin, target.field, template, &mut emitter);
    }

    if kind.rotates() {
        *angle = (*angle + ROTATION_STEP) % std::f32::consts::TAU;
    }

    (emitter.spawned, None)
}

fn beam(kind: WeaponKind, shot: &ShotStats, target: &FireTarget) -> LaserFired {
    let (beams, color) = match kind {
        WeaponKind::Evolved(EvolvedWeapon::Prism) => (3, Color::srgb(0.7, 0.4, 1.0)),
        WeaponKind::Super(SuperWeapon::Judgement) => (6, Color::srgb(1.0, 0.95, 0.6)),
        _ => (1, Color::srgb(1.0, 0.2, 0.2)),
    };

    LaserFired {
        origin: target.origin,
        damage: shot.damage,
        beam_count: beams + shot.extra as u32 + target.modifiers.extra_shots,
        max_range: target.field.height(),
        color,
    }
}

fn pattern(
    kind: WeaponKind,
    shot: &ShotStats,
    angle: f32,
    origin: Vec2,
    field: Rect,
    template: SpawnProjectile,
    out: &mut Emitter<'_>,
) {
    let extra = shot.extra;
    let level = shot.level as usize;

    match kind {
        WeaponKind::Base(base) => match base {
            BaseWeapon::Blaster => out.line(template, 1 + extra, 10.0),
            BaseWeapon::Scatter => out.fan(template, 3 + extra + level / 2, 40.0),
            BaseWeapon::Rocket => out.fan(
                template.with_behavior(Behavior::Explosive { radius: 40.0 }),
                1 + extra,
                15.0,
            ),
            BaseWeapon::Frost => out.fan(
                template.with_behavior(Behavior::Freezing {
                    chance: 0.3 + 0.05 * shot.level as f32,
                    duration_ms: 1_500,
                }),
                1 + extra,
                12.0,
            ),
            BaseWeapon::Tesla => out.fan(
                template.with_behavior(Behavior::Chaining {
                    chains: 2 + shot.level / 2,
                }),
                1 + extra,
                20.0,
            ),
            BaseWeapon::Ricochet => out.fan(
                template.with_behavior(Behavior::Bouncing {
                    bounces: 2 + shot.level / 3,
                }),
                1 + extra,
                30.0,
            ),
            BaseWeapon::Wave => waves(out, template, 1 + extra, 30.0, 18.0),
            BaseWeapon::Trap => {
                let spike = template
                    .at(origin + Vec2::Y * TRAP_REACH, Vec2::ZERO)
                    .with_behavior(Behavior::Zone {
                        duration_ms: 2_000,
                        radius: 30.0,
                    });
                out.line(spike, 1 + extra, 60.0);
            }
            BaseWeapon::Seeker => out.fan(
                template.with_behavior(Behavior::Homing {
                    turn_rate: 0.1,
                    speed: shot.speed,
                }),
                1 + extra,
                30.0,
            ),
            BaseWeapon::Vortex => spirals(out, template, 2 + extra, 20.0, 8.0),
            BaseWeapon::Ring => out.ring(
                template.with_orbit(origin, 150.0 + 10.0 * shot.level as f32),
                6 + extra + level,
                0.0,
            ),
            // Beam; handled before dispatch.
            BaseWeapon::Laser => {}
        },

        WeaponKind::Evolved(evolved) => match evolved {
            EvolvedWeapon::TriBarrel => out.line(template, 3 + extra, 14.0),
            EvolvedWeapon::DroneHive => out.ring(
                template.with_behavior(Behavior::Homing {
                    turn_rate: 0.12,
                    speed: shot.speed,
                }),
                8 + extra,
                0.0,
            ),
            EvolvedWeapon::Tempest => out.fan(template, 9 + extra, 150.0),
            EvolvedWeapon::Halo => out.ring(template.with_orbit(origin, 220.0), 10 + extra, angle),
            EvolvedWeapon::Maelstrom => {
                for (i, dir) in ring_directions(6 + extra, angle).enumerate() {
                    let hand = if i % 2 == 0 { Hand::Left } else { Hand::Right };
                    out.emit(
                        template
                            .at(origin, dir * shot.speed)
                            .with_behavior(Behavior::Spiraling {
                                strength: 10.0,
                                hand,
                            }),
                    );
                }
            }
            EvolvedWeapon::Warhead => out.fan(
                template.with_behavior(Behavior::Explosive { radius: 90.0 }),
                3 + extra,
                30.0,
            ),
            EvolvedWeapon::Blizzard => out.fan(
                template.with_behavior(Behavior::Freezing {
                    chance: 0.6,
                    duration_ms: 2_500,
                }),
                7 + extra,
                70.0,
            ),
            EvolvedWeapon::StormCoil => out.fan(
                template.with_behavior(Behavior::Chaining { chains: 6 }),
                3 + extra,
                40.0,
            ),
            EvolvedWeapon::Pinball => out.fan(
                template.with_behavior(Behavior::Bouncing { bounces: 6 }),
                5 + extra,
                60.0,
            ),
            EvolvedWeapon::Tsunami => waves(out, template, 5 + extra, 60.0, 30.0),
            EvolvedWeapon::Minefield => {
                let mine = template.with_behavior(Behavior::Zone {
                    duration_ms: 4_000,
                    radius: 50.0,
                });
                minefield(out, mine, 5 + extra, origin.y + 2.0 * TRAP_REACH, field);
            }
            EvolvedWeapon::Prism => {}
        },

        WeaponKind::Super(sup) => match sup {
            SuperWeapon::Armageddon => out.fan(
                template.with_behavior(Behavior::Explosive { radius: 60.0 }),
                16 + extra,
                180.0,
            ),
            SuperWeapon::Singularity => {
                out.ring(template.with_orbit(origin, 300.0), 16 + extra, angle);
                out.ring(
                    template.with_behavior(Behavior::Homing {
                        turn_rate: 0.15,
                        speed: shot.speed,
                    }),
                    8,
                    -angle,
                );
            }
            SuperWeapon::Cataclysm => {
                out.ring(
                    template.with_behavior(Behavior::Explosive { radius: 80.0 }),
                    8 + extra,
                    0.0,
                );
                out.ring(
                    template.with_behavior(Behavior::Freezing {
                        chance: 0.8,
                        duration_ms: 3_000,
                    }),
                    8 + extra,
                    PI / 8.0,
                );
            }
            SuperWeapon::Judgement => {}
        },
    }
}

/// Weaving shots in a line, alternating phase so neighbours mirror each other.
fn waves(out: &mut Emitter<'_>, template: SpawnProjectile, count: usize, amplitude: f32, spacing: f32) {
    for (i, offset) in lateral_offsets(count, spacing).enumerate() {
        let phase = if i % 2 == 0 { 0.0 } else { PI };
        out.emit(
            template
                .at(template.position + Vec2::X * offset, template.velocity)
                .with_behavior(Behavior::Wave {
                    amplitude,
                    frequency: 0.05,
                    phase,
                }),
        );
    }
}

/// A fan whose shots curl away from the centre line.
fn spirals(out: &mut Emitter<'_>, template: SpawnProjectile, count: usize, spread: f32, strength: f32) {
    let speed = template.velocity.length();
    for (i, dir) in spread_directions(count, spread).enumerate() {
        let hand = if i % 2 == 0 { Hand::Left } else { Hand::Right };
        out.emit(
            template
                .at(template.position, dir * speed)
                .with_behavior(Behavior::Spiraling { strength, hand }),
        );
    }
}

/// Zones spread evenly across the field width at height `y`.
fn minefield(out: &mut Emitter<'_>, mine: SpawnProjectile, count: usize, y: f32, field: Rect) {
    let y = y.min(field.max.y);
    let step = field.width() / (count + 1) as f32;
    for i in 1..=count {
        let x = field.min.x + step * i as f32;
        out.emit(mine.at(Vec2::new(x, y), Vec2::ZERO));
    }
}
