//! Stat derivation: modifiers, proficiency and hit points
//!
//! Pure functions over scores and class entries; the builder calls
//! these once at finalize time and the results freeze into the sheet.

use super::scores::AbilityScores;
use super::ClassLevelEntry;
use crate::rules::RaceDefinition;
use crate::types::Ability;

/// Derived combat statistics, frozen at finalize time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStats {
    pub final_scores: AbilityScores,
    pub hp_max: i32,
    pub proficiency: i32,
}

/// Ability modifier: floor((score - 10) / 2)
///
/// Floor division, not truncation: modifier(7) is -2, not -1.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Proficiency bonus step function: floor((level - 1) / 4) + 2
pub fn proficiency_bonus(total_level: u32) -> i32 {
    ((total_level as i32) - 1).div_euclid(4) + 2
}

/// Average hit-die gain for one level past the first: floor(hd/2) + 1
fn average_die(hit_die: u32) -> i32 {
    (hit_die as i32) / 2 + 1
}

/// Hit-point maximum over the ordered class entries
///
/// The entry flagged first gets the full die plus CON modifier for
/// its first level; every other level anywhere uses the average-die
/// convention. Not clamped: a negative CON modifier can drive the
/// total below zero, matching the table rules as written.
pub fn hit_point_max(entries: &[ClassLevelEntry], con_mod: i32) -> i32 {
    let mut hp = 0;
    for entry in entries {
        let level = entry.level as i32;
        let per_level = average_die(entry.hit_die) + con_mod;
        if entry.is_first {
            hp += entry.hit_die as i32 + con_mod;
            if level > 1 {
                hp += (level - 1) * per_level;
            }
        } else {
            hp += level * per_level;
        }
    }
    hp
}

/// Derive final scores, hp_max and proficiency from the build inputs
///
/// Callers must pass at least one class entry; the draft enforces
/// this before finalize is reachable.
pub fn derive(
    base_scores: &AbilityScores,
    race: &RaceDefinition,
    entries: &[ClassLevelEntry],
) -> DerivedStats {
    let mut final_scores = *base_scores;
    for ability in Ability::all() {
        final_scores.set(*ability, base_scores.get(*ability) + race.bonus(*ability));
    }

    let total_level: u32 = entries.iter().map(|e| e.level).sum();
    let con_mod = ability_modifier(final_scores.get(Ability::Con));

    DerivedStats {
        final_scores,
        hp_max: hit_point_max(entries, con_mod),
        proficiency: proficiency_bonus(total_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(hit_die: u32, level: u32, is_first: bool) -> ClassLevelEntry {
        ClassLevelEntry {
            name: "Test".to_string(),
            level,
            hit_die,
            primary: Ability::Str,
            is_first,
        }
    }

    #[test]
    fn test_modifier_floors_negatives() {
        assert_eq!(ability_modifier(18), 4);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(1), -5);
    }

    #[test]
    fn test_proficiency_steps() {
        for lvl in 1..=4 {
            assert_eq!(proficiency_bonus(lvl), 2);
        }
        for lvl in 5..=8 {
            assert_eq!(proficiency_bonus(lvl), 3);
        }
        for lvl in 9..=12 {
            assert_eq!(proficiency_bonus(lvl), 4);
        }
        for lvl in 13..=16 {
            assert_eq!(proficiency_bonus(lvl), 5);
        }
        for lvl in 17..=20 {
            assert_eq!(proficiency_bonus(lvl), 6);
        }
    }

    #[test]
    fn test_hp_first_class_levels() {
        // d8 first class, 1 level, con +2: 8 + 2 = 10
        assert_eq!(hit_point_max(&[entry(8, 1, true)], 2), 10);
        // Second level of the same entry adds (8/2+1) + 2 = 7
        assert_eq!(hit_point_max(&[entry(8, 2, true)], 2), 17);
    }

    #[test]
    fn test_hp_multiclass_entry() {
        // d6 x3 as a non-first entry, con +1: 3 * ((6/2+1) + 1) = 15
        assert_eq!(hit_point_max(&[entry(6, 3, false)], 1), 15);
    }

    #[test]
    fn test_hp_mixed_build() {
        // Warlock 1 (first, d8) + Sorcerer 1 (d6), con 0:
        // 8 + 1 * (6/2+1) = 12
        let entries = vec![entry(8, 1, true), entry(6, 1, false)];
        assert_eq!(hit_point_max(&entries, 0), 12);
    }

    #[test]
    fn test_hp_not_clamped_below_zero() {
        // Known edge case: the rules as written never floor the gain
        // at 1 per level, so a terrible CON goes negative.
        assert_eq!(hit_point_max(&[entry(6, 3, true)], -5), -15);
    }

    #[test]
    fn test_derive_applies_race_bonuses() {
        use crate::rules::Rulebook;

        let book = Rulebook::srd();
        let dwarf = book.race("mountain_dwarf").unwrap();
        let base = AbilityScores::uniform(10);
        let derived = derive(&base, dwarf, &[entry(12, 1, true)]);

        assert_eq!(derived.final_scores.strength, 12);
        assert_eq!(derived.final_scores.constitution, 12);
        assert_eq!(derived.final_scores.wisdom, 10);
        // d12 + con_mod(12) = 12 + 1
        assert_eq!(derived.hp_max, 13);
        assert_eq!(derived.proficiency, 2);
    }

    proptest! {
        #[test]
        fn prop_modifier_matches_floor_formula(score in -10i32..=40) {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            prop_assert_eq!(ability_modifier(score), expected);
        }

        #[test]
        fn prop_proficiency_monotonic(lvl in 1u32..=19) {
            prop_assert!(proficiency_bonus(lvl + 1) >= proficiency_bonus(lvl));
        }

        #[test]
        fn prop_hp_deterministic(hd in prop::sample::select(vec![6u32, 8, 10, 12]),
                                 levels in 1u32..=20,
                                 con_mod in -5i32..=5) {
            let entries = vec![entry(hd, levels, true)];
            let a = hit_point_max(&entries, con_mod);
            let b = hit_point_max(&entries, con_mod);
            prop_assert_eq!(a, b);
            // First level always grants the full die
            let avg = (hd as i32) / 2 + 1;
            let expected = hd as i32 + con_mod + (levels as i32 - 1) * (avg + con_mod);
            prop_assert_eq!(a, expected);
        }
    }
}
