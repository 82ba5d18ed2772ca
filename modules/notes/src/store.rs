//! NoteStore — in-memory note registry keyed by name.
//!
//! Every operation runs under a single exclusive lock, so mutations are
//! atomic and reads always observe a consistent snapshot.

use notes_types::Note;
use parking_lot::Mutex;
use thiserror::Error;

pub type NoteResult<T> = Result<T, NoteError>;

/// Errors returned by [`NoteStore`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// Name or text missing on create
    #[error("Note name and text are required")]
    InvalidInput,

    /// A note with this name already exists
    #[error("Note already exists: {0}")]
    Conflict(String),

    /// No note with this name
    #[error("Note not found: {0}")]
    NotFound(String),
}

/// In-memory note storage. Notes are kept in insertion order.
#[derive(Default)]
pub struct NoteStore {
    notes: Mutex<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new note. Both name and text must be non-empty.
    pub fn create(&self, name: &str, text: &str) -> NoteResult<Note> {
        if name.is_empty() || text.is_empty() {
            return Err(NoteError::InvalidInput);
        }

        let mut notes = self.notes.lock();
        if notes.iter().any(|n| n.name == name) {
            return Err(NoteError::Conflict(name.to_string()));
        }

        let note = Note::new(name, text);
        notes.push(note.clone());

        log::info!("[NOTES] Created note '{}' ({} total)", name, notes.len());
        Ok(note)
    }

    pub fn get(&self, name: &str) -> NoteResult<Note> {
        self.notes
            .lock()
            .iter()
            .find(|n| n.name == name)
            .cloned()
            .ok_or_else(|| NoteError::NotFound(name.to_string()))
    }

    /// Replace the text of an existing note. Empty text is allowed here.
    pub fn update(&self, name: &str, text: &str) -> NoteResult<Note> {
        let mut notes = self.notes.lock();
        let note = notes
            .iter_mut()
            .find(|n| n.name == name)
            .ok_or_else(|| NoteError::NotFound(name.to_string()))?;

        note.text = text.to_string();

        log::info!("[NOTES] Updated note '{}'", name);
        Ok(note.clone())
    }

    pub fn delete(&self, name: &str) -> NoteResult<()> {
        let mut notes = self.notes.lock();
        let index = notes
            .iter()
            .position(|n| n.name == name)
            .ok_or_else(|| NoteError::NotFound(name.to_string()))?;

        notes.remove(index);

        log::info!("[NOTES] Deleted note '{}' ({} left)", name, notes.len());
        Ok(())
    }

    /// Snapshot of all notes
    pub fn list(&self) -> Vec<Note> {
        self.notes.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }
}
