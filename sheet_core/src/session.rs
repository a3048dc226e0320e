//! Session state: one character's combat loop

use crate::combat::{resolver, CombatLog, ResourceConfig, ResourcePool, ResultEvent};
use crate::rules::Rulebook;
use crate::sheet::CharacterSheet;
use rand::Rng;

/// A player command inside a combat session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Cast a spell by rulebook id
    Cast(String),
    /// Weapon attack with the first class's primary ability
    Attack,
    /// 1d8 healing, capped at hp_max
    Heal,
    /// Flip the hex curse flag
    ToggleHex,
    /// Refill every resource and clear hex
    LongRest,
}

/// The aggregate of a running session: frozen sheet, mutable
/// resources and HP, and the bounded event log
#[derive(Debug, Clone)]
pub struct SessionState {
    sheet: CharacterSheet,
    pool: ResourcePool,
    current_hp: i32,
    log: CombatLog,
}

impl SessionState {
    pub fn new(sheet: CharacterSheet) -> Self {
        Self::with_resources(sheet, ResourceConfig::default())
    }

    /// Start a session with explicit resource maxima; pools always
    /// open full
    pub fn with_resources(sheet: CharacterSheet, config: ResourceConfig) -> Self {
        let current_hp = sheet.hp_max;
        let mut log = CombatLog::new();
        log.push(ResultEvent::Info {
            text: "Combat initiated.".to_string(),
        });
        SessionState {
            sheet,
            pool: ResourcePool::new(config),
            current_hp,
            log,
        }
    }

    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    /// Execute one command against the session, appending every
    /// produced event to the log and returning them
    pub fn handle(
        &mut self,
        book: &Rulebook,
        command: Command,
        rng: &mut impl Rng,
    ) -> Vec<ResultEvent> {
        let events = match command {
            Command::Cast(spell_id) => {
                resolver::resolve(&spell_id, book, &self.sheet, &mut self.pool, rng)
            }
            Command::Attack => {
                vec![resolver::weapon_attack(
                    &self.sheet,
                    self.pool.hex_active(),
                    rng,
                )]
            }
            Command::Heal => {
                let heal = rng.gen_range(1..=8);
                self.current_hp = (self.current_hp + heal).min(self.sheet.hp_max);
                vec![ResultEvent::Healed {
                    amount: heal,
                    hp: self.current_hp,
                    hp_max: self.sheet.hp_max,
                }]
            }
            Command::ToggleHex => {
                let active = self.pool.toggle_hex();
                vec![ResultEvent::HexToggled { active }]
            }
            Command::LongRest => {
                self.pool.reset();
                vec![ResultEvent::Rested]
            }
        };

        self.log.extend(events.iter().cloned());
        events
    }

    /// Log an input that mapped to no command
    pub fn note_unrecognized(&mut self, input: &str) {
        self.log.push(ResultEvent::Unrecognized {
            input: input.to_string(),
        });
    }

    /// Take damage (for future front ends); floor at zero
    pub fn apply_damage(&mut self, amount: i32) {
        self.current_hp = (self.current_hp - amount).max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CharacterDraft;
    use crate::types::Ability;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(book: &Rulebook) -> SessionState {
        let mut draft = CharacterDraft::new();
        draft.set_race(book, "human");
        draft.set_base_score(Ability::Con, 14);
        draft.add_class_levels(book, "warlock", 1).unwrap();
        SessionState::new(draft.finalize(book).unwrap())
    }

    #[test]
    fn test_session_opens_full() {
        let book = Rulebook::srd();
        let s = session(&book);
        // d8 + con_mod(15 -> +2) = 10
        assert_eq!(s.current_hp(), 10);
        assert_eq!(s.pool().pact.current, s.pool().pact.max);
        assert_eq!(s.log().len(), 1);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let book = Rulebook::srd();
        let mut s = session(&book);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..5 {
            s.handle(&book, Command::Heal, &mut rng);
        }
        assert_eq!(s.current_hp(), s.sheet().hp_max);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let book = Rulebook::srd();
        let mut s = session(&book);
        s.apply_damage(999);
        assert_eq!(s.current_hp(), 0);
    }

    #[test]
    fn test_commands_append_to_log() {
        let book = Rulebook::srd();
        let mut s = session(&book);
        let mut rng = StdRng::seed_from_u64(1);

        let events = s.handle(&book, Command::ToggleHex, &mut rng);
        assert_eq!(events, vec![ResultEvent::HexToggled { active: true }]);
        assert!(s.pool().hex_active());

        s.handle(&book, Command::LongRest, &mut rng);
        assert!(!s.pool().hex_active());

        let last: Vec<&ResultEvent> = s.log().iter().collect();
        assert!(matches!(last.last(), Some(ResultEvent::Rested)));
    }

    #[test]
    fn test_unrecognized_input_logged_not_fatal() {
        let book = Rulebook::srd();
        let mut s = session(&book);
        s.note_unrecognized("xyzzy");
        let last: Vec<&ResultEvent> = s.log().iter().collect();
        assert_eq!(
            *last.last().unwrap(),
            &ResultEvent::Unrecognized {
                input: "xyzzy".to_string()
            }
        );
    }
}
