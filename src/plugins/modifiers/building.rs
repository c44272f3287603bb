use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use super::stats::{ModifierSet, Stat};

/// Permanent meta-progression bonuses, keyed by stat.
///
/// Every bonus is added flat, including onto multiplicative fields: a `FireRate` bonus of
/// 0.1 turns a multiplier of 1.2 into 1.3.
#[derive(Clone, Debug, Default)]
pub struct BuildingBonuses {
    bonuses: HashMap<Stat, f32>,
}

impl BuildingBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted `(stat name, amount)` pairs. Unknown names are skipped.
    pub fn from_named<'a>(pairs: impl IntoIterator<Item = (&'a str, f32)>) -> Self {
        let mut out = Self::new();
        for (name, amount) in pairs {
            match Stat::from_name(name) {
                Some(stat) => out.add(stat, amount),
                None => warn!("Ignoring building bonus for unknown stat '{name}'"),
            }
        }
        out
    }

    /// Stack `amount` onto whatever `stat` already carries.
    pub fn add(&mut self, stat: Stat, amount: f32) {
        *self.bonuses.entry(stat).or_insert(0.0) += amount;
    }

    pub fn with(mut self, stat: Stat, amount: f32) -> Self {
        self.add(stat, amount);
        self
    }

    pub fn get(&self, stat: Stat) -> f32 {
        self.bonuses.get(&stat).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    pub fn apply(&self, mods: &mut ModifierSet) {
        for (&stat, &amount) in &self.bonuses {
            mods.add_flat(stat, amount);
        }
    }
}
