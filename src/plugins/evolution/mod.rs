//! Evolution plugin: announces evolutions and super evolutions as soon as gear allows them.
//!
//! Detection only runs when the loadout changed (a level-up, a pickup, an evolution).
//! Applying a recipe is left to whoever reads the messages, usually the level-up UI:
//! it calls `Loadout::apply_evolution` / `apply_super_evolution` when the player accepts.

pub mod recipes;
pub mod resolver;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::weapons::Loadout;

pub use recipes::{EVOLUTIONS, EvolutionRecipe, SUPER_EVOLUTIONS, SuperEvolutionRecipe};
pub use resolver::{
    EvolutionHint, check_for_evolutions, check_for_super_evolutions, create_evolved_weapon,
    create_super_evolved_weapon, evolution_hints,
};

#[derive(Message, Clone, Copy, Debug)]
pub struct EvolutionReady {
    pub recipe: &'static EvolutionRecipe,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SuperEvolutionReady {
    pub recipe: &'static SuperEvolutionRecipe,
}

pub fn plugin(app: &mut App) {
    app.add_message::<EvolutionReady>()
        .add_message::<SuperEvolutionReady>();

    app.add_systems(
        Update,
        announce_evolutions
            .run_if(in_state(GameState::InGame))
            .run_if(resource_changed::<Loadout>),
    );
}

pub fn announce_evolutions(
    loadout: Res<Loadout>,
    mut evolutions: MessageWriter<EvolutionReady>,
    mut supers: MessageWriter<SuperEvolutionReady>,
) {
    if let Some(recipe) = check_for_evolutions(&loadout.weapons, &loadout.passives) {
        info!(
            "evolution ready: {:?} + {:?} -> {}",
            recipe.base, recipe.passive, recipe.config.name
        );
        evolutions.write(EvolutionReady { recipe });
    }

    if let Some(recipe) = check_for_super_evolutions(&loadout.weapons) {
        info!(
            "super evolution ready: {:?} + {:?} -> {}",
            recipe.first, recipe.second, recipe.config.name
        );
        supers.write(SuperEvolutionReady { recipe });
    }
}

#[cfg(test)]
mod tests;
