//! NoteStore: the authoritative in-memory note collection
//!
//! Notes are kept in insertion order. Ids come from a counter owned by the
//! store and advanced under the same write lock as the push, so ids are
//! unique and increase in list order even under concurrent creates.

use super::NotesError;
use chrono::{DateTime, SubsecRound, Utc};
use notes_types::Note;
use parking_lot::RwLock;

struct Inner {
    notes: Vec<Note>,
    next_id: u64,
}

pub struct NoteStore {
    inner: RwLock<Inner>,
}

/// Current time at the precision the wire format carries
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every note, in creation order
    pub fn list(&self) -> Vec<Note> {
        self.inner.read().notes.clone()
    }

    /// Append a new note. Content is stored as given, empty included.
    pub fn create(&self, content: String) -> Note {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let note = Note {
            id,
            content,
            created_at: now(),
            updated_at: None,
        };
        inner.notes.push(note.clone());

        log::debug!("[Notes] Created note {} ({} total)", id, inner.notes.len());
        note
    }

    /// Replace a note's content and stamp `updated_at`
    pub fn update(&self, id: u64, content: String) -> Result<Note, NotesError> {
        let mut inner = self.inner.write();
        let note = inner
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotesError::NotFound(id))?;

        note.content = content;
        note.updated_at = Some(now());

        log::debug!("[Notes] Updated note {}", id);
        Ok(note.clone())
    }

    /// Remove the note with this id. Returns whether anything was removed;
    /// a missing id is not an error.
    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write();
        let before = inner.notes.len();
        inner.notes.retain(|n| n.id != id);
        let removed = inner.notes.len() != before;

        if removed {
            log::debug!("[Notes] Deleted note {}", id);
        }
        removed
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
