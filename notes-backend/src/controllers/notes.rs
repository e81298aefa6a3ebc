//! Notes REST API: list, create, update and delete over the in-memory store.

use actix_web::{error::InternalError, web, HttpResponse, Responder};
use notes_types::{ErrorResponse, NoteContent};

use crate::notes::NotesError;
use crate::AppState;

/// Read a path id leniently: leading whitespace and one `+` sign are
/// skipped, then the leading run of digits is used. Anything else,
/// negative numbers included, matches no note.
fn parse_note_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().ok()
}

/// GET /api/notes
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.notes.list())
}

/// POST /api/notes
async fn create_note(data: web::Data<AppState>, body: web::Json<NoteContent>) -> impl Responder {
    let note = data.notes.create(body.into_inner().content);
    HttpResponse::Created().json(note)
}

/// PUT /api/notes/{id}
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<NoteContent>,
) -> Result<HttpResponse, NotesError> {
    let raw = path.into_inner();
    // Store ids start at 1, so an unparsable id falls through as 0 and misses
    let id = parse_note_id(&raw).unwrap_or(0);

    match data.notes.update(id, body.into_inner().content) {
        Ok(note) => Ok(HttpResponse::Ok().json(note)),
        Err(e) => {
            log::warn!("Update rejected: {}", e);
            Err(e)
        }
    }
}

/// DELETE /api/notes/{id}
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    if let Some(id) = parse_note_id(&path) {
        data.notes.delete(id);
    }
    HttpResponse::NoContent().finish()
}

/// Malformed JSON bodies answer 400 with the same `{error}` payload shape
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .app_data(json_config())
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
