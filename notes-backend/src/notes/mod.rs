//! Notes system: ordered, process-local note collection
//!
//! Nothing here is durable: a restart discards every note.

pub mod error;
pub mod store;

pub use error::NotesError;
pub use store::NoteStore;
