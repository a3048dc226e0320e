//! Action resolution
//!
//! One call per command: resource check, optional to-hit roll per
//! beam, damage roll, events out. No state survives a call except
//! what lives in the resource pool.

use super::event::ResultEvent;
use super::resources::ResourcePool;
use crate::rules::{Rulebook, SpellDefinition};
use crate::sheet::CharacterSheet;
use crate::types::Dice;
use rand::Rng;

/// Minimum d20 value counted as a critical hit
///
/// The hex curse widens the range from 20 to 19.
pub fn crit_threshold(hex_active: bool) -> u32 {
    if hex_active {
        19
    } else {
        20
    }
}

/// Resolve a spell cast by id
///
/// Unknown ids come back as a single `UnknownSpell` event; everything
/// else delegates to [`resolve_spell`].
pub fn resolve(
    spell_id: &str,
    book: &Rulebook,
    sheet: &CharacterSheet,
    pool: &mut ResourcePool,
    rng: &mut impl Rng,
) -> Vec<ResultEvent> {
    match book.spell(spell_id) {
        Some(spell) => resolve_spell(spell, sheet, pool, rng),
        None => vec![ResultEvent::UnknownSpell {
            input: spell_id.to_string(),
        }],
    }
}

/// Resolve one cast of a known spell
pub fn resolve_spell(
    spell: &SpellDefinition,
    sheet: &CharacterSheet,
    pool: &mut ResourcePool,
    rng: &mut impl Rng,
) -> Vec<ResultEvent> {
    let mut events = Vec::new();

    let source = match pool.consume_for_tier(spell.tier) {
        Ok(source) => source,
        Err(_) => {
            events.push(ResultEvent::OutOfSlots {
                spell: spell.name.clone(),
            });
            return events;
        }
    };

    events.push(ResultEvent::Cast {
        spell: spell.name.clone(),
        source,
    });

    if spell.utility {
        events.push(ResultEvent::UtilityEffect {
            spell: spell.name.clone(),
            desc: spell.desc.clone(),
        });
        return events;
    }

    let Some(dice) = spell.dice else {
        return events;
    };

    let hex = pool.hex_active();
    let beams = spell.beam_count(sheet.total_level);

    for _ in 0..beams {
        if spell.auto_hit {
            events.push(roll_damage(spell, dice, false, hex, sheet.proficiency, rng));
        } else {
            let ability = sheet.attack_ability();
            let roll = rng.gen_range(1..=20u32);
            let modifier = sheet.modifier(ability);
            let crit = roll >= crit_threshold(hex);
            events.push(ResultEvent::AttackRoll {
                ability,
                roll,
                modifier,
                proficiency: sheet.proficiency,
                total: roll as i32 + modifier + sheet.proficiency,
                crit,
            });
            events.push(roll_damage(spell, dice, crit, hex, sheet.proficiency, rng));
        }
    }

    events
}

/// Weapon attack: a to-hit roll with the first class's primary
/// ability; no damage dice, as on the paper sheet
pub fn weapon_attack(
    sheet: &CharacterSheet,
    hex_active: bool,
    rng: &mut impl Rng,
) -> ResultEvent {
    let ability = sheet.attack_ability();
    let roll = rng.gen_range(1..=20u32);
    let modifier = sheet.modifier(ability);
    ResultEvent::AttackRoll {
        ability,
        roll,
        modifier,
        proficiency: sheet.proficiency,
        total: roll as i32 + modifier + sheet.proficiency,
        crit: roll >= crit_threshold(hex_active),
    }
}

fn roll_damage(
    spell: &SpellDefinition,
    dice: Dice,
    crit: bool,
    hex_active: bool,
    proficiency: i32,
    rng: &mut impl Rng,
) -> ResultEvent {
    let count = if crit { dice.count * 2 } else { dice.count };
    let base: i32 = (0..count).map(|_| rng.gen_range(1..=dice.faces) as i32).sum();
    let bonus = spell.fixed_bonus + if hex_active { proficiency } else { 0 };
    ResultEvent::DamageRoll {
        base,
        bonus,
        total: base + bonus,
        damage_type: spell.damage_type,
    }
}
