//! A held weapon: kind, static config, level, last-fire timestamp and per-kind sub-state.

use bevy::prelude::*;

use crate::common::clock::Millis;
use crate::plugins::modifiers::ModifierSet;
use crate::plugins::projectiles::pool::ProjectilePool;

use super::kind::{BaseWeapon, WeaponConfig, WeaponKind};
use super::messages::LaserFired;
use super::overheat::Overheat;
use super::patterns::{self, FireTarget, ShotStats};

/// Fire-rate improvement per level above 1, in percent of the base interval.
pub const INTERVAL_STEP_PERCENT: u64 = 4;
/// Damage growth per level above 1, in percent of the base damage.
pub const DAMAGE_STEP_PERCENT: i64 = 6;

/// Time-based state some kinds carry between shots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeaponState {
    Stateless,
    Beam(Overheat),
    /// Current angle of a continuously rotating pattern.
    Rotating { angle: f32 },
}

impl WeaponState {
    fn for_kind(kind: WeaponKind) -> Self {
        if kind.overheats() {
            WeaponState::Beam(Overheat::default())
        } else if kind.rotates() {
            WeaponState::Rotating { angle: 0.0 }
        } else {
            WeaponState::Stateless
        }
    }
}

/// Inputs to one fire call.
#[derive(Clone, Copy, Debug)]
pub struct FireContext<'a> {
    pub origin: Vec2,
    pub now_ms: Millis,
    pub modifiers: &'a ModifierSet,
    pub field: Rect,
}

/// What one fire call produced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Volley {
    /// Projectiles actually allocated (may be short of the pattern when the pool is full).
    pub spawned: usize,
    pub laser: Option<LaserFired>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    kind: WeaponKind,
    config: WeaponConfig,
    level: u8,
    last_fire_ms: Millis,
    state: WeaponState,
}

impl Weapon {
    pub fn new(kind: WeaponKind, config: WeaponConfig) -> Self {
        Self {
            kind,
            config,
            level: 1,
            last_fire_ms: 0,
            state: WeaponState::for_kind(kind),
        }
    }

    pub fn base(kind: BaseWeapon) -> Self {
        Self::new(WeaponKind::Base(kind), kind.config())
    }

    #[inline]
    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    #[inline]
    pub fn config(&self) -> &WeaponConfig {
        &self.config
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn last_fire_ms(&self) -> Millis {
        self.last_fire_ms
    }

    #[inline]
    pub fn state(&self) -> &WeaponState {
        &self.state
    }

    pub fn overheat(&self) -> Option<&Overheat> {
        match &self.state {
            WeaponState::Beam(heat) => Some(heat),
            _ => None,
        }
    }

    /// Evolved and super weapons are always at max level.
    pub fn is_max_level(&self) -> bool {
        self.level >= self.config.max_level
    }

    pub fn is_evolved(&self) -> bool {
        matches!(self.kind, WeaponKind::Evolved(_))
    }

    pub fn is_super(&self) -> bool {
        matches!(self.kind, WeaponKind::Super(_))
    }

    /// `floor(base · (1 − 0.04·(level − 1)) / fire_rate_multiplier)`.
    pub fn effective_interval_ms(&self, modifiers: &ModifierSet) -> Millis {
        interval_at(&self.config, self.level, modifiers)
    }

    /// `floor(base · (1 + 0.06·(level − 1)))`.
    pub fn damage(&self) -> i32 {
        damage_at(&self.config, self.level)
    }

    pub fn can_fire(&self, now: Millis, modifiers: &ModifierSet) -> bool {
        if let WeaponState::Beam(heat) = &self.state
            && heat.is_locked(now)
        {
            return false;
        }
        now >= self.last_fire_ms + self.effective_interval_ms(modifiers)
    }

    /// Fire one volley. Callers gate this with [`can_fire`](Self::can_fire).
    pub fn fire(&mut self, ctx: &FireContext, pool: &mut ProjectilePool) -> Volley {
        self.last_fire_ms = ctx.now_ms;

        let shot = self.shot_stats(ctx.modifiers);
        let target = FireTarget {
            origin: ctx.origin,
            field: ctx.field,
            modifiers: ctx.modifiers,
        };

        let mut angle = match self.state {
            WeaponState::Rotating { angle } => angle,
            _ => 0.0,
        };
        let (spawned, laser) = patterns::fire_volley(self.kind, &shot, &mut angle, &target, pool);

        match &mut self.state {
            WeaponState::Beam(heat) => heat.on_shot(ctx.now_ms),
            WeaponState::Rotating { angle: a } => *a = angle,
            WeaponState::Stateless => {}
        }

        trace!(
            "{} fired: {spawned} projectiles{}",
            self.config.name,
            if laser.is_some() { " + beam" } else { "" }
        );
        Volley { spawned, laser }
    }

    fn shot_stats(&self, modifiers: &ModifierSet) -> ShotStats {
        ShotStats {
            damage: (self.damage() as f32 * modifiers.damage_multiplier).floor() as i32,
            pierce: self.config.bonus_pierce + modifiers.pierce,
            speed: self.config.projectile_speed * modifiers.speed_multiplier,
            level: self.level,
            extra: modifiers.extra_projectiles as usize,
            category: self.config.category,
        }
    }

    /// Advance time-based sub-state (overheat recovery and decay).
    pub fn tick(&mut self, now: Millis) {
        if let WeaponState::Beam(heat) = &mut self.state {
            heat.tick(now);
        }
    }

    /// `false` at max level, and always for evolved and super weapons.
    pub fn level_up(&mut self) -> bool {
        if !matches!(self.kind, WeaponKind::Base(_)) || self.is_max_level() {
            return false;
        }
        self.level += 1;
        true
    }

    /// Display lines for the level-up card: what the next level changes.
    pub fn upgrade_preview(&self) -> Vec<String> {
        if !matches!(self.kind, WeaponKind::Base(_)) || self.is_max_level() {
            return vec![format!("{} is at max level", self.config.name)];
        }

        let neutral = ModifierSet::default();
        let next = self.level + 1;
        vec![
            format!("Level {} -> {next}", self.level),
            format!(
                "Damage {} -> {}",
                self.damage(),
                damage_at(&self.config, next)
            ),
            format!(
                "Interval {} ms -> {} ms",
                self.effective_interval_ms(&neutral),
                interval_at(&self.config, next, &neutral)
            ),
        ]
    }
}

fn interval_at(config: &WeaponConfig, level: u8, modifiers: &ModifierSet) -> Millis {
    let steps = level.saturating_sub(1) as u64;
    let percent = 100u64.saturating_sub(INTERVAL_STEP_PERCENT * steps).max(10);
    let scaled = (config.fire_interval_ms as u64 * percent) as f64 / 100.0;

    let rate = if modifiers.fire_rate_multiplier > 0.0 {
        modifiers.fire_rate_multiplier
    } else {
        ModifierSet::MIN_FIRE_RATE
    };
    (scaled / rate as f64).floor() as Millis
}

fn damage_at(config: &WeaponConfig, level: u8) -> i32 {
    let steps = level.saturating_sub(1) as i64;
    let scaled = config.base_damage as i64 * (100 + DAMAGE_STEP_PERCENT * steps);
    scaled.div_euclid(100) as i32
}
