use super::building::BuildingBonuses;
use super::character::CharacterKind;
use super::passive::Passive;
use super::stats::{ModifierSet, PlayerStats};

/// Fold every effect source into a fresh snapshot.
///
/// Order is character, then passives, then buildings. Additive and multiplicative fields
/// come out the same for any passive order; only the flat building pass sits on top.
/// `stats` is reset to `base` first, so calling this twice is harmless.
pub fn aggregate(
    character: CharacterKind,
    passives: &[Passive],
    buildings: &BuildingBonuses,
    base: &PlayerStats,
    stats: &mut PlayerStats,
) -> ModifierSet {
    let mut mods = ModifierSet::default();
    *stats = *base;

    character.apply_innate(&mut mods, stats);
    for passive in passives {
        passive.apply(&mut mods, stats);
    }
    buildings.apply(&mut mods);

    mods.sanitize();
    stats.sanitize();
    mods
}
