//! Axum route handlers for the notes HTTP API.

use crate::store::{NoteError, NoteStore};
use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use notes_types::*;
use std::sync::Arc;
use std::time::Instant;

const UPLOAD_FORM: &str = include_str!("../public/UploadForm.html");

pub struct AppState {
    pub store: NoteStore,
    pub start_time: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: NoteStore::new(),
            start_time: Instant::now(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/", get(index))
        .route("/UploadForm.html", get(upload_form))
        .route("/notes", get(list_notes))
        .route(
            "/notes/:name",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/write", post(write_note))
        .route("/status", get(status))
        .with_state(state)
        .layer(cors)
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        match self {
            NoteError::InvalidInput => {
                (StatusCode::BAD_REQUEST, "Note name and text are required").into_response()
            }
            NoteError::Conflict(_) => (StatusCode::BAD_REQUEST, "Bad Request").into_response(),
            NoteError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    }
}

// GET /
async fn index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/UploadForm.html")]).into_response()
}

// GET /UploadForm.html
async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

// GET /notes
async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<Note>> {
    Json(state.store.list())
}

// GET /notes/:name
async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<String, NoteError> {
    log::debug!("[NOTES] Read '{}'", name);
    state.store.get(&name).map(|note| note.text)
}

// PUT /notes/:name
async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    text: String,
) -> Result<Json<Note>, NoteError> {
    state.store.update(&name, &text).map(Json)
}

// DELETE /notes/:name
async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, NoteError> {
    state.store.delete(&name)?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /write
async fn write_note(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, &'static str), NoteError> {
    let (name, text) = read_create_form(request).await.into_parts();

    if let Err(e) = state.store.create(&name, &text) {
        log::warn!("[NOTES] Rejected create of '{}': {}", name, e);
        return Err(e);
    }

    Ok((StatusCode::CREATED, "Created"))
}

// GET /status
async fn status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        total_notes: state.store.len(),
    })
}

/// Extract the create form from a multipart, urlencoded or JSON body.
/// Anything unreadable counts as an empty form.
async fn read_create_form(request: Request) -> CreateNoteForm {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let parsed = if content_type.starts_with("multipart/form-data") {
        match Multipart::from_request(request, &()).await {
            Ok(multipart) => read_multipart_form(multipart).await,
            Err(e) => Err(e.body_text()),
        }
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        Form::<CreateNoteForm>::from_request(request, &())
            .await
            .map(|Form(form)| form)
            .map_err(|e| e.body_text())
    } else if content_type.starts_with("application/json") {
        Json::<CreateNoteForm>::from_request(request, &())
            .await
            .map(|Json(form)| form)
            .map_err(|e| e.body_text())
    } else {
        Ok(CreateNoteForm::default())
    };

    parsed.unwrap_or_else(|e| {
        log::warn!("[NOTES] Unreadable create body: {}", e);
        CreateNoteForm::default()
    })
}

async fn read_multipart_form(mut multipart: Multipart) -> Result<CreateNoteForm, String> {
    let mut form = CreateNoteForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        let field_name = field.name().map(str::to_string);
        let value = field.text().await.map_err(|e| e.body_text())?;

        match field_name.as_deref() {
            Some("note_name") => form.note_name = Some(value),
            Some("note") => form.note = Some(value),
            _ => {}
        }
    }

    Ok(form)
}
