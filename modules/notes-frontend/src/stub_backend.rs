//! In-process stand-in for the notes backend, bound to an ephemeral port.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, put};
use chrono::Utc;
use notes_types::{ErrorResponse, Note, NoteContent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct StubState {
    notes: Mutex<Vec<Note>>,
    next_id: Mutex<u64>,
    failing: AtomicBool,
}

pub struct StubBackend {
    pub api_url: String,
    state: Arc<StubState>,
}

impl StubBackend {
    pub async fn spawn() -> Self {
        let state = Arc::new(StubState::default());

        let app = axum::Router::new()
            .route("/api/notes", get(list).post(create))
            .route("/api/notes/:id", put(update).delete(remove))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            api_url: format!("http://{}/api", addr),
            state,
        }
    }

    /// Make every endpoint answer 500 until switched back
    pub fn set_failing(&self, failing: bool) {
        self.state.failing.store(failing, Ordering::SeqCst);
    }

    /// Insert a note directly, as another client would
    pub fn push_note(&self, content: &str) -> Note {
        let id = {
            let mut next = self.state.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let note = Note {
            id,
            content: content.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.state.notes.lock().unwrap().push(note.clone());
        note
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.notes.lock().unwrap().clone()
    }
}

fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("stub failure")),
    )
        .into_response()
}

async fn list(State(state): State<Arc<StubState>>) -> Response {
    if state.failing.load(Ordering::SeqCst) {
        return failure();
    }
    Json(state.notes.lock().unwrap().clone()).into_response()
}

async fn create(State(state): State<Arc<StubState>>, Json(body): Json<NoteContent>) -> Response {
    if state.failing.load(Ordering::SeqCst) {
        return failure();
    }
    let id = {
        let mut next = state.next_id.lock().unwrap();
        *next += 1;
        *next
    };
    let note = Note {
        id,
        content: body.content,
        created_at: Utc::now(),
        updated_at: None,
    };
    state.notes.lock().unwrap().push(note.clone());
    (StatusCode::CREATED, Json(note)).into_response()
}

async fn update(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
    Json(body): Json<NoteContent>,
) -> Response {
    if state.failing.load(Ordering::SeqCst) {
        return failure();
    }
    let mut notes = state.notes.lock().unwrap();
    match notes.iter_mut().find(|n| n.id == id) {
        Some(note) => {
            note.content = body.content;
            note.updated_at = Some(Utc::now());
            Json(note.clone()).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Note not found")),
        )
            .into_response(),
    }
}

async fn remove(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    if state.failing.load(Ordering::SeqCst) {
        return failure();
    }
    state.notes.lock().unwrap().retain(|n| n.id != id);
    StatusCode::NO_CONTENT.into_response()
}
