//! Notes API Client
//!
//! This module provides the HTTP client for the notes REST surface. Calls
//! are blocking (each owns a small tokio runtime) and are meant to run on
//! worker threads spawned by the UI, with results sent back over channels.

use crate::egui_app::config::Config;
use crate::shared::note::{ApiNote, CreateNoteRequest, DeleteNoteRequest, UpdateNoteRequest};
use crate::shared::ApiError;
use reqwest::Client;
use tokio::runtime::Runtime;

/// Notes API client
pub struct NotesApiClient {
    config: Config,
}

impl NotesApiClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetch the full note list, retrying transient failures.
    ///
    /// Wraps `GET /notes` in the timeout-and-limited-retry policy used for
    /// the initial load: each attempt is bounded by the configured request
    /// timeout, and up to `max_retries` attempts are made with a short fixed
    /// delay in between. The last error is returned if all attempts fail.
    pub fn list_notes(&self) -> Result<Vec<ApiNote>, ApiError> {
        let attempts = self.config.max_retries().max(1);
        let mut last_error = ApiError::network("no attempts made");

        for attempt in 1..=attempts {
            match self.list_notes_once() {
                Ok(notes) => return Ok(notes),
                Err(e) => {
                    tracing::warn!(
                        "Loading notes failed (attempt {}/{}): {}",
                        attempt,
                        attempts,
                        e
                    );
                    if !e.is_retryable() {
                        return Err(e);
                    }
                    last_error = e;
                    if attempt < attempts {
                        std::thread::sleep(std::time::Duration::from_millis(500));
                    }
                }
            }
        }

        Err(last_error)
    }

    /// Single `GET /notes` attempt
    fn list_notes_once(&self) -> Result<Vec<ApiNote>, ApiError> {
        let url = self.config.api_url("/notes");
        let timeout = self.config.request_timeout();

        let rt = runtime()?;
        rt.block_on(async {
            // Client lives and dies with this runtime
            let client = Client::new();
            let response = client
                .get(&url)
                .timeout(timeout)
                .send()
                .await
                .map_err(ApiError::from)?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(ApiError::http(status.as_u16(), body));
            }

            response
                .json::<Vec<ApiNote>>()
                .await
                .map_err(|e| ApiError::serialization(format!("Failed to parse response: {}", e)))
        })
    }

    /// Create a note via `POST /notes/save`
    pub fn save_note(&self, request: &CreateNoteRequest) -> Result<ApiNote, ApiError> {
        self.post_json("/notes/save", request)
    }

    /// Update a note via `POST /notes/update`
    pub fn update_note(&self, request: &UpdateNoteRequest) -> Result<ApiNote, ApiError> {
        self.post_json("/notes/update", request)
    }

    /// Delete a note via `POST /notes/delete`
    pub fn delete_note(&self, request: &DeleteNoteRequest) -> Result<(), ApiError> {
        let url = self.config.api_url("/notes/delete");
        let timeout = self.config.request_timeout();

        let rt = runtime()?;
        rt.block_on(async {
            let client = Client::new();
            let response = client
                .post(&url)
                .header("Content-Type", "application/json")
                .timeout(timeout)
                .json(request)
                .send()
                .await
                .map_err(ApiError::from)?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(ApiError::http(status.as_u16(), body));
            }

            Ok(())
        })
    }

    /// POST a JSON payload and decode an `ApiNote` response
    fn post_json<T: serde::Serialize>(
        &self,
        path: &str,
        request: &T,
    ) -> Result<ApiNote, ApiError> {
        let url = self.config.api_url(path);
        let timeout = self.config.request_timeout();

        let rt = runtime()?;
        rt.block_on(async {
            let client = Client::new();
            let response = client
                .post(&url)
                .header("Content-Type", "application/json")
                .timeout(timeout)
                .json(request)
                .send()
                .await
                .map_err(ApiError::from)?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(ApiError::http(status.as_u16(), body));
            }

            response
                .json::<ApiNote>()
                .await
                .map_err(|e| ApiError::serialization(format!("Failed to parse response: {}", e)))
        })
    }
}

fn runtime() -> Result<Runtime, ApiError> {
    Runtime::new().map_err(|e| ApiError::network(format!("Failed to create runtime: {}", e)))
}
