//! Persistence: the character save file and the campaign journal
//!
//! Both are plain JSON at fixed relative paths, overwritten whole on
//! every save. Load failures are recoverable by design: a missing or
//! corrupt file means "start fresh", but the two cases stay
//! distinguishable for callers and tests.

use crate::sheet::CharacterSheet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default character save path, relative to the working directory
pub const CHARACTER_FILE: &str = ".dnd_character.json";
/// Default journal path
pub const JOURNAL_FILE: &str = ".campaign_journal.json";

/// Save-side failure; loads never error, they degrade
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write save file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to serialize: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result of trying to load the character file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File present and well-formed
    Loaded(CharacterSheet),
    /// File does not exist; never created or deleted
    Missing,
    /// File present but unreadable or unparsable
    Corrupt,
}

impl LoadOutcome {
    /// Collapse to the sheet, treating Missing and Corrupt alike
    pub fn into_option(self) -> Option<CharacterSheet> {
        match self {
            LoadOutcome::Loaded(sheet) => Some(sheet),
            LoadOutcome::Missing | LoadOutcome::Corrupt => None,
        }
    }
}

/// Write the character file, overwriting unconditionally
pub fn save_character_to(path: &Path, sheet: &CharacterSheet) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(sheet)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the character file at the default path
pub fn save_character(sheet: &CharacterSheet) -> Result<(), StoreError> {
    save_character_to(Path::new(CHARACTER_FILE), sheet)
}

/// Load the character file, tagging absence vs corruption
pub fn load_character_from(path: &Path) -> LoadOutcome {
    if !path.exists() {
        return LoadOutcome::Missing;
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return LoadOutcome::Corrupt,
    };
    match serde_json::from_str(&content) {
        Ok(sheet) => LoadOutcome::Loaded(sheet),
        Err(_) => LoadOutcome::Corrupt,
    }
}

/// Load the character file from the default path
pub fn load_character() -> LoadOutcome {
    load_character_from(Path::new(CHARACTER_FILE))
}

/// The campaign journal: an ordered list of free-text notes,
/// saved eagerly after every mutation
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
    notes: Vec<String>,
}

impl Journal {
    /// Open the journal at the given path; missing or malformed
    /// files yield an empty journal
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let notes = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Journal { path, notes }
    }

    /// Open the journal at the default path
    pub fn open_default() -> Self {
        Self::open(JOURNAL_FILE)
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note and save
    pub fn add(&mut self, note: &str) -> Result<(), StoreError> {
        let trimmed = note.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.notes.push(format!("- {}", trimmed));
        self.save()
    }

    /// Drop every note and save
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.notes.clear();
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.notes)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
