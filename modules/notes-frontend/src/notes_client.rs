//! Typed HTTP client for the notes backend API.

use notes_types::{Note, NoteContent};
use reqwest::StatusCode;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Any way a backend call can fail. Callers only tell success from failure;
/// the variants exist for logs.
#[derive(Debug)]
pub enum ClientError {
    /// The request never produced a response
    Transport(reqwest::Error),
    /// The backend answered with a non-success status
    Status { status: StatusCode, body: String },
    /// The response body was not the expected JSON
    Decode(reqwest::Error),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "request failed: {e}"),
            Self::Status { status, body } if body.is_empty() => write!(f, "HTTP {status}"),
            Self::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            Self::Decode(e) => write!(f, "invalid response body: {e}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(e) | Self::Decode(e) => Some(e),
            Self::Status { .. } => None,
        }
    }
}

pub struct NotesClient {
    base_url: String,
    client: reqwest::Client,
}

impl NotesClient {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: u64) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }

    /// Send a request and turn transport errors and non-2xx statuses into `ClientError`
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let resp = req
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(resp)
    }

    /// GET /notes
    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let resp = self.send(self.client.get(self.notes_url())).await?;
        resp.json().await.map_err(ClientError::Decode)
    }

    /// POST /notes
    pub async fn create_note(&self, content: &str) -> Result<Note, ClientError> {
        let resp = self
            .send(
                self.client
                    .post(self.notes_url())
                    .json(&NoteContent::new(content)),
            )
            .await?;
        resp.json().await.map_err(ClientError::Decode)
    }

    /// PUT /notes/{id}
    pub async fn update_note(&self, id: u64, content: &str) -> Result<Note, ClientError> {
        let resp = self
            .send(
                self.client
                    .put(self.note_url(id))
                    .json(&NoteContent::new(content)),
            )
            .await?;
        resp.json().await.map_err(ClientError::Decode)
    }

    /// DELETE /notes/{id}
    pub async fn delete_note(&self, id: u64) -> Result<(), ClientError> {
        self.send(self.client.delete(self.note_url(id))).await?;
        Ok(())
    }
}
