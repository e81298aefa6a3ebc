//! Axum route handlers for the notes UI.
//!
//! A plain `GET /` always starts over: the view drops back to loading and the
//! browser is sent through `/load`, so every page load asks the backend for
//! the current collection. Handlers that act on the view (load, create,
//! update, delete) redirect to `/?r=1`, which renders the view as it stands.

use crate::notes_client::NotesClient;
use crate::render;
use crate::view::{messages, NotesView};
use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Where handlers send the browser once the view reflects their outcome
pub const SHOW_VIEW: &str = "/?r=1";

pub struct AppState {
    pub client: NotesClient,
    pub view: Mutex<NotesView>,
}

impl AppState {
    pub fn new(client: NotesClient) -> Self {
        Self {
            client,
            view: Mutex::new(NotesView::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    /// Set on redirects back from a handler; absent on a fresh page load
    #[serde(default)]
    pub r: Option<String>,
}

// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let mut view = state.view.lock().await;
    if query.r.is_none() {
        view.reset();
    }
    if view.is_loading() {
        return Html(render::loading_page());
    }

    let html = render::page(&view);
    // Action errors show once
    view.dismiss_error();
    Html(html)
}

// GET /load
pub async fn load(State(state): State<Arc<AppState>>) -> Redirect {
    let mut view = state.view.lock().await;
    match state.client.list_notes().await {
        Ok(notes) => {
            log::info!("Loaded {} notes", notes.len());
            view.loaded(notes);
        }
        Err(e) => {
            log::error!("Failed to fetch notes from {}: {}", state.client.base_url(), e);
            view.load_failed();
        }
    }
    Redirect::to(SHOW_VIEW)
}

// POST /retry
pub async fn retry(State(state): State<Arc<AppState>>) -> Redirect {
    state.view.lock().await.reset();
    Redirect::to("/")
}

// POST /notes
pub async fn create(State(state): State<Arc<AppState>>, Form(form): Form<NoteForm>) -> Redirect {
    let content = match NotesView::submittable(&form.content) {
        Some(c) => c,
        None => return Redirect::to(SHOW_VIEW),
    };

    let mut view = state.view.lock().await;
    match state.client.create_note(content).await {
        Ok(note) => view.note_created(note),
        Err(e) => {
            log::warn!("Create failed: {}", e);
            view.set_draft(form.content.as_str());
            view.action_failed(messages::CREATE_FAILED);
        }
    }
    Redirect::to(SHOW_VIEW)
}

// POST /notes/:id/update
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Form(form): Form<NoteForm>,
) -> Redirect {
    let content = match NotesView::submittable(&form.content) {
        Some(c) => c,
        None => return Redirect::to(SHOW_VIEW),
    };

    let mut view = state.view.lock().await;
    match state.client.update_note(id, content).await {
        Ok(note) => view.note_updated(note),
        Err(e) => {
            log::warn!("Update of note {} failed: {}", id, e);
            view.action_failed(messages::UPDATE_FAILED);
        }
    }
    Redirect::to(SHOW_VIEW)
}

// POST /notes/:id/delete
pub async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Redirect {
    let mut view = state.view.lock().await;
    match state.client.delete_note(id).await {
        Ok(()) => view.note_deleted(id),
        Err(e) => {
            log::warn!("Delete of note {} failed: {}", id, e);
            view.action_failed(messages::DELETE_FAILED);
        }
    }
    Redirect::to(SHOW_VIEW)
}

pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(index))
        .route("/load", axum::routing::get(load))
        .route("/retry", axum::routing::post(retry))
        .route("/notes", axum::routing::post(create))
        .route("/notes/:id/update", axum::routing::post(update))
        .route("/notes/:id/delete", axum::routing::post(delete))
        .with_state(state)
}
