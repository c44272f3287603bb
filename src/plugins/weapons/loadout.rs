//! The player's held gear: character, weapons, passives and building bonuses.

use bevy::prelude::*;

use crate::plugins::evolution::recipes::{EvolutionRecipe, SuperEvolutionRecipe};
use crate::plugins::evolution::resolver::{create_evolved_weapon, create_super_evolved_weapon};
use crate::plugins::modifiers::{
    BuildingBonuses, CharacterKind, ModifierSet, Passive, PassiveKind, PlayerStats, aggregate,
};

use super::kind::{BaseWeapon, WeaponKind};
use super::weapon::Weapon;

#[derive(Resource, Clone, Debug)]
pub struct Loadout {
    pub character: CharacterKind,
    pub weapons: Vec<Weapon>,
    pub passives: Vec<Passive>,
    pub buildings: BuildingBonuses,
}

impl Default for Loadout {
    fn default() -> Self {
        Self::new(CharacterKind::default())
    }
}

/// Weapon every run with this character starts with.
pub fn starting_weapon(character: CharacterKind) -> BaseWeapon {
    match character {
        CharacterKind::Pilot => BaseWeapon::Blaster,
        CharacterKind::Gunner => BaseWeapon::Scatter,
        CharacterKind::Juggernaut => BaseWeapon::Rocket,
        CharacterKind::Scout => BaseWeapon::Ricochet,
        CharacterKind::Engineer => BaseWeapon::Trap,
        CharacterKind::Oracle => BaseWeapon::Seeker,
    }
}

impl Loadout {
    pub const MAX_WEAPONS: usize = 6;
    pub const MAX_PASSIVES: usize = 6;

    pub fn new(character: CharacterKind) -> Self {
        Self {
            character,
            weapons: vec![Weapon::base(starting_weapon(character))],
            passives: Vec::new(),
            buildings: BuildingBonuses::default(),
        }
    }

    pub fn with_buildings(mut self, buildings: BuildingBonuses) -> Self {
        self.buildings = buildings;
        self
    }

    pub fn weapon(&self, kind: impl Into<WeaponKind>) -> Option<&Weapon> {
        let kind = kind.into();
        self.weapons.iter().find(|w| w.kind() == kind)
    }

    pub fn passive(&self, kind: PassiveKind) -> Option<&Passive> {
        self.passives.iter().find(|p| p.kind == kind)
    }

    /// `false` if already held or all slots are taken.
    pub fn add_weapon(&mut self, kind: BaseWeapon) -> bool {
        if self.weapon(kind).is_some() || self.weapons.len() >= Self::MAX_WEAPONS {
            return false;
        }
        self.weapons.push(Weapon::base(kind));
        true
    }

    pub fn level_up_weapon(&mut self, kind: BaseWeapon) -> bool {
        let kind = WeaponKind::Base(kind);
        self.weapons
            .iter_mut()
            .find(|w| w.kind() == kind)
            .is_some_and(Weapon::level_up)
    }

    /// `false` if already held or all slots are taken.
    pub fn add_passive(&mut self, kind: PassiveKind) -> bool {
        if self.passive(kind).is_some() || self.passives.len() >= Self::MAX_PASSIVES {
            return false;
        }
        self.passives.push(Passive::new(kind));
        true
    }

    pub fn level_up_passive(&mut self, kind: PassiveKind) -> bool {
        self.passives
            .iter_mut()
            .find(|p| p.kind == kind)
            .is_some_and(Passive::level_up)
    }

    /// Fresh snapshot from every source.
    pub fn modifiers(&self) -> ModifierSet {
        let base = PlayerStats::default();
        let mut scratch = base;
        aggregate(self.character, &self.passives, &self.buildings, &base, &mut scratch)
    }

    /// `base` with the current gear's player-side effects applied.
    pub fn player_stats(&self, base: &PlayerStats) -> PlayerStats {
        let mut stats = *base;
        aggregate(self.character, &self.passives, &self.buildings, base, &mut stats);
        stats
    }

    /// Swap the recipe's maxed base weapon for the evolved one, in place.
    pub fn apply_evolution(&mut self, recipe: &EvolutionRecipe) -> bool {
        let base = WeaponKind::Base(recipe.base);
        let Some(slot) = self
            .weapons
            .iter_mut()
            .find(|w| w.kind() == base && w.is_max_level())
        else {
            warn!(
                "cannot evolve into {}: no max-level {:?} held",
                recipe.config.name, recipe.base
            );
            return false;
        };

        *slot = create_evolved_weapon(recipe);
        info!("{:?} evolved into {}", recipe.base, recipe.config.name);
        true
    }

    /// Replace both evolved weapons with the super weapon, which takes the first one's slot.
    pub fn apply_super_evolution(&mut self, recipe: &SuperEvolutionRecipe) -> bool {
        let first = WeaponKind::Evolved(recipe.first);
        let second = WeaponKind::Evolved(recipe.second);

        let (Some(a), Some(b)) = (
            self.weapons.iter().position(|w| w.kind() == first),
            self.weapons.iter().position(|w| w.kind() == second),
        ) else {
            warn!(
                "cannot super-evolve into {}: {:?} and {:?} are not both held",
                recipe.config.name, recipe.first, recipe.second
            );
            return false;
        };

        let (keep, drop) = if a < b { (a, b) } else { (b, a) };
        self.weapons.remove(drop);
        self.weapons[keep] = create_super_evolved_weapon(recipe);
        info!(
            "{:?} + {:?} fused into {}",
            recipe.first, recipe.second, recipe.config.name
        );
        true
    }
}
