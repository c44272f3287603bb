//! Modifier aggregation: character innates, passive items and building bonuses folded into
//! one `ModifierSet` snapshot per fire, plus the `PlayerStats` record.

pub mod aggregate;
pub mod building;
pub mod character;
pub mod passive;
pub mod stats;

use bevy::prelude::*;

pub use aggregate::aggregate;
pub use building::BuildingBonuses;
pub use character::CharacterKind;
pub use passive::{Passive, PassiveKind};
pub use stats::{BasePlayerStats, ModifierSet, PlayerStats, Stat};

pub fn plugin(app: &mut App) {
    app.init_resource::<BasePlayerStats>()
        .init_resource::<PlayerStats>();
}

#[cfg(test)]
mod tests;
