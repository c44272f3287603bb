//! Pure queries over held gear. Nothing here mutates; the loadout splices results in.

use crate::plugins::modifiers::Passive;
use crate::plugins::weapons::kind::WeaponKind;
use crate::plugins::weapons::weapon::Weapon;

use super::recipes::{EVOLUTIONS, EvolutionRecipe, SUPER_EVOLUTIONS, SuperEvolutionRecipe};

/// First recipe (table order) whose base weapon and passive are both held at max level.
pub fn check_for_evolutions(
    weapons: &[Weapon],
    passives: &[Passive],
) -> Option<&'static EvolutionRecipe> {
    EVOLUTIONS.iter().find(|recipe| {
        let base = WeaponKind::Base(recipe.base);
        weapons.iter().any(|w| w.kind() == base && w.is_max_level())
            && passives
                .iter()
                .any(|p| p.kind == recipe.passive && p.is_maxed())
    })
}

/// A fresh evolved weapon at its single fixed level.
pub fn create_evolved_weapon(recipe: &EvolutionRecipe) -> Weapon {
    Weapon::new(WeaponKind::Evolved(recipe.result), recipe.config)
}

/// First super recipe whose two evolved weapons are both held.
pub fn check_for_super_evolutions(weapons: &[Weapon]) -> Option<&'static SuperEvolutionRecipe> {
    let evolved: Vec<_> = weapons
        .iter()
        .filter_map(|w| match w.kind() {
            WeaponKind::Evolved(kind) => Some(kind),
            _ => None,
        })
        .collect();

    if evolved.len() < 2 {
        return None;
    }

    SUPER_EVOLUTIONS
        .iter()
        .find(|recipe| evolved.contains(&recipe.first) && evolved.contains(&recipe.second))
}

pub fn create_super_evolved_weapon(recipe: &SuperEvolutionRecipe) -> Weapon {
    Weapon::new(WeaponKind::Super(recipe.result), recipe.config)
}

/// Progress toward one evolution, for the progression UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvolutionHint {
    pub recipe: &'static EvolutionRecipe,
    pub weapon_maxed: bool,
    pub passive_held: bool,
    pub passive_maxed: bool,
}

impl EvolutionHint {
    pub fn is_ready(&self) -> bool {
        self.weapon_maxed && self.passive_maxed
    }
}

/// One hint per recipe whose base weapon is held, in table order.
pub fn evolution_hints(weapons: &[Weapon], passives: &[Passive]) -> Vec<EvolutionHint> {
    EVOLUTIONS
        .iter()
        .filter_map(|recipe| {
            let base = WeaponKind::Base(recipe.base);
            let weapon = weapons.iter().find(|w| w.kind() == base)?;
            let passive = passives.iter().find(|p| p.kind == recipe.passive);

            Some(EvolutionHint {
                recipe,
                weapon_maxed: weapon.is_max_level(),
                passive_held: passive.is_some(),
                passive_maxed: passive.is_some_and(Passive::is_maxed),
            })
        })
        .collect()
}
