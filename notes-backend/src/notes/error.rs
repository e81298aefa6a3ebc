use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use notes_types::ErrorResponse;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors surfaced by the note store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesError {
    /// No stored note carries this id
    NotFound(u64),
}

impl Display for NotesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for NotesError {}

impl ResponseError for NotesError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let msg = match self {
            Self::NotFound(_) => "Note not found",
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(msg))
    }
}
