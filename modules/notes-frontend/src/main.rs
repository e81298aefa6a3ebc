//! Notes UI Service: server-rendered frontend for the notes backend.
//!
//! Keeps a local view of the note collection, renders it as HTML and turns
//! form posts into calls against the backend's `/api/notes` endpoints.
//!
//! Default: http://127.0.0.1:5173/

mod notes_client;
mod render;
mod routes;
#[cfg(test)]
mod stub_backend;
mod view;

use notes_client::NotesClient;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let port: u16 = std::env::var("NOTES_FRONTEND_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5173);

    let api_url = std::env::var("NOTES_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api".to_string());

    let client = NotesClient::new(&api_url);
    log::info!("Using notes API at {}", client.base_url());

    let state = Arc::new(AppState::new(client));
    let app = routes::router(state);

    let addr = format!("127.0.0.1:{}", port);
    log::info!("Notes UI listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}
