//! Application state

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sheet_core::{
    store, CharacterDraft, CharacterSheet, Command, Journal, LoadOutcome, Rulebook,
    SessionState,
};

/// Which screen currently owns the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Builder,
    Combat,
    Journal,
}

/// Builder wizard position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderStep {
    Name,
    Race,
    /// Index into the six abilities being entered
    Scores(usize),
    /// Class picker; `Some(idx)` means a class is chosen and the
    /// level count is being typed
    Classes(Option<usize>),
}

pub struct App {
    pub screen: Screen,
    pub book: Rulebook,
    /// Result of the startup load, drives the menu preview
    pub saved: LoadOutcome,
    pub session: Option<SessionState>,
    pub journal: Journal,
    pub draft: CharacterDraft,
    pub step: BuilderStep,
    /// Shared text-entry buffer for wizard and journal input
    pub input: String,
    /// Whether the journal screen is capturing a note
    pub journal_entry: bool,
    /// List cursor for race/class pickers
    pub selected: usize,
    /// One-line notice shown at the bottom of menus
    pub status: Option<String>,
    pub rng: StdRng,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            screen: Screen::Menu,
            book: Rulebook::srd(),
            saved: store::load_character(),
            session: None,
            journal: Journal::open_default(),
            draft: CharacterDraft::new(),
            step: BuilderStep::Name,
            input: String::new(),
            journal_entry: false,
            selected: 0,
            status: None,
            rng: StdRng::from_entropy(),
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Builder => self.handle_builder_key(key.code),
            Screen::Combat => self.handle_combat_key(key.code),
            Screen::Journal => self.handle_journal_key(key.code),
        }
    }

    // === Main menu ===

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('1') => {
                if let LoadOutcome::Loaded(sheet) = self.saved.clone() {
                    self.start_session(sheet);
                } else {
                    self.status = Some("No saved character to load.".to_string());
                }
            }
            KeyCode::Char('2') => self.start_builder(),
            KeyCode::Char('3') | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn start_builder(&mut self) {
        self.draft = CharacterDraft::new();
        self.step = BuilderStep::Name;
        self.input.clear();
        self.selected = 0;
        self.status = None;
        self.screen = Screen::Builder;
    }

    fn start_session(&mut self, sheet: CharacterSheet) {
        self.session = Some(SessionState::new(sheet));
        self.status = None;
        self.screen = Screen::Combat;
    }

    // === Builder wizard ===

    fn handle_builder_key(&mut self, code: KeyCode) {
        match self.step {
            BuilderStep::Name => match code {
                KeyCode::Enter => {
                    let name = std::mem::take(&mut self.input);
                    self.draft.set_name(&name);
                    self.step = BuilderStep::Race;
                    self.selected = 0;
                }
                KeyCode::Esc => self.screen = Screen::Menu,
                _ => self.edit_input(code),
            },
            BuilderStep::Race => match code {
                KeyCode::Up => self.move_cursor_up(),
                KeyCode::Down => self.move_cursor_down(self.book.races().len()),
                KeyCode::Enter => {
                    let race_id = self
                        .book
                        .races()
                        .get(self.selected)
                        .map(|r| r.id.clone())
                        .unwrap_or_default();
                    self.draft.set_race(&self.book, &race_id);
                    self.step = BuilderStep::Scores(0);
                    self.input.clear();
                }
                KeyCode::Esc => self.screen = Screen::Menu,
                _ => {}
            },
            BuilderStep::Scores(idx) => match code {
                KeyCode::Enter => {
                    // Malformed numeric input falls back to 10
                    let score = self.input.trim().parse().unwrap_or(10);
                    let ability = sheet_core::Ability::all()[idx];
                    self.draft.set_base_score(ability, score);
                    self.input.clear();
                    if idx + 1 < sheet_core::Ability::all().len() {
                        self.step = BuilderStep::Scores(idx + 1);
                    } else {
                        self.step = BuilderStep::Classes(None);
                        self.selected = 0;
                    }
                }
                KeyCode::Esc => self.screen = Screen::Menu,
                _ => self.edit_input(code),
            },
            BuilderStep::Classes(None) => match code {
                KeyCode::Up => self.move_cursor_up(),
                KeyCode::Down => self.move_cursor_down(self.book.classes().len()),
                KeyCode::Enter => {
                    self.step = BuilderStep::Classes(Some(self.selected));
                    self.input.clear();
                }
                KeyCode::Char('f') | KeyCode::Char('F') => self.finish_build(),
                KeyCode::Esc => self.screen = Screen::Menu,
                _ => {}
            },
            BuilderStep::Classes(Some(class_idx)) => match code {
                KeyCode::Enter => {
                    let levels = self.input.trim().parse().unwrap_or(1);
                    if let Some(class) = self.book.classes().get(class_idx) {
                        let class_id = class.id.clone();
                        // Class came from the picker, the id is known
                        let _ = self.draft.add_class_levels(&self.book, &class_id, levels);
                    }
                    self.input.clear();
                    self.step = BuilderStep::Classes(None);
                }
                KeyCode::Esc => self.step = BuilderStep::Classes(None),
                _ => self.edit_input(code),
            },
        }
    }

    fn finish_build(&mut self) {
        if !self.draft.can_finalize() {
            self.status = Some("Add at least one class level first.".to_string());
            return;
        }
        let draft = std::mem::replace(&mut self.draft, CharacterDraft::new());
        match draft.finalize(&self.book) {
            Ok(sheet) => {
                if let Err(err) = store::save_character(&sheet) {
                    self.status = Some(format!("Save failed: {}", err));
                }
                self.saved = LoadOutcome::Loaded(sheet.clone());
                self.start_session(sheet);
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    // === Combat ===

    fn handle_combat_key(&mut self, code: KeyCode) {
        let Some(session) = self.session.as_mut() else {
            self.screen = Screen::Menu;
            return;
        };
        let command = match code {
            KeyCode::Char('q') => {
                self.screen = Screen::Menu;
                return;
            }
            KeyCode::Char('j') => {
                self.screen = Screen::Journal;
                self.journal_entry = false;
                self.input.clear();
                return;
            }
            KeyCode::Char('a') => Some(Command::Attack),
            KeyCode::Char('e') => Some(Command::Heal),
            KeyCode::Char('h') => Some(Command::ToggleHex),
            KeyCode::Char('r') => Some(Command::LongRest),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let idx = (c as usize).wrapping_sub('1' as usize);
                self.book
                    .spells()
                    .get(idx)
                    .map(|spell| Command::Cast(spell.id.clone()))
            }
            _ => None,
        };

        match (command, code) {
            (Some(command), _) => {
                session.handle(&self.book, command, &mut self.rng);
            }
            (None, KeyCode::Char(c)) => session.note_unrecognized(&c.to_string()),
            _ => {}
        }
    }

    // === Journal ===

    fn handle_journal_key(&mut self, code: KeyCode) {
        if self.journal_entry {
            match code {
                KeyCode::Enter => {
                    let note = std::mem::take(&mut self.input);
                    if let Err(err) = self.journal.add(&note) {
                        self.status = Some(format!("Disk error: {}", err));
                    }
                    self.journal_entry = false;
                }
                KeyCode::Esc => {
                    self.input.clear();
                    self.journal_entry = false;
                }
                _ => self.edit_input(code),
            }
            return;
        }
        match code {
            KeyCode::Char('a') => {
                self.journal_entry = true;
                self.input.clear();
            }
            KeyCode::Char('c') => {
                if let Err(err) = self.journal.clear() {
                    self.status = Some(format!("Disk error: {}", err));
                }
            }
            KeyCode::Char('b') | KeyCode::Esc => {
                self.screen = if self.session.is_some() {
                    Screen::Combat
                } else {
                    Screen::Menu
                };
            }
            _ => {}
        }
    }

    // === Shared input helpers ===

    fn edit_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            _ => {}
        }
    }

    fn move_cursor_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_cursor_down(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
