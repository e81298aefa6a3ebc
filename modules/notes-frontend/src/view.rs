//! Local view model mirroring the backend's note collection.
//!
//! Holds no I/O: route handlers call the backend and feed the outcome in.
//! The model only ever changes from server responses, so a failed call
//! leaves the notes exactly as they were.

use notes_types::Note;

/// Messages shown when a backend call fails
pub mod messages {
    pub const FETCH_FAILED: &str = "Failed to fetch notes";
    pub const CREATE_FAILED: &str = "Failed to create note";
    pub const UPDATE_FAILED: &str = "Failed to update note";
    pub const DELETE_FAILED: &str = "Failed to delete note";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Initial fetch not answered yet
    Loading,
    Ready,
    /// Initial fetch failed; the list is not shown until a retry succeeds
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct NotesView {
    state: LoadState,
    notes: Vec<Note>,
    /// Transient error from the last create/update/delete
    error: Option<String>,
    /// Text in the compose box, kept when a create fails
    draft: String,
}

impl NotesView {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            notes: Vec::new(),
            error: None,
            draft: String::new(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Forget the last fetch outcome so the next render fetches again
    pub fn reset(&mut self) {
        self.state = LoadState::Loading;
        self.error = None;
    }

    /// The collection arrived; replace the local copy in server order
    pub fn loaded(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.state = LoadState::Ready;
        self.error = None;
    }

    pub fn load_failed(&mut self) {
        self.state = LoadState::Failed(messages::FETCH_FAILED.to_string());
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Trimmed draft content, or `None` when there is nothing to submit
    pub fn submittable(content: &str) -> Option<&str> {
        let trimmed = content.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn note_created(&mut self, note: Note) {
        self.notes.push(note);
        self.draft.clear();
        self.error = None;
    }

    pub fn note_updated(&mut self, note: Note) {
        if let Some(existing) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *existing = note;
        }
        self.error = None;
    }

    pub fn note_deleted(&mut self, id: u64) {
        self.notes.retain(|n| n.id != id);
        self.error = None;
    }

    pub fn action_failed(&mut self, msg: &str) {
        self.error = Some(msg.to_string());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

impl Default for NotesView {
    fn default() -> Self {
        Self::new()
    }
}
