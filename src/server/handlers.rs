use super::types::{CopyResponse, ErrorResponse, ViewRequest};
use crate::{
    app::{Session, SessionSnapshot},
    blog::{BlogGenerator, InputParameters},
    render::{BrowserClipboard, render_page},
};
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, Json, Redirect},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{Instrument, error, info, info_span};

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub generator: Arc<BlogGenerator>,
    pub clipboard: Arc<BrowserClipboard>,
}

impl AppState {
    pub fn new(session: Session, generator: BlogGenerator) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            generator: Arc::new(generator),
            clipboard: Arc::new(BrowserClipboard::new()),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let session = state.session.lock().await;

    render_page(&session).map(Html).map_err(|e| {
        error!("Failed to render page: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Failed to render page</h1>".to_string()),
        )
    })
}

pub async fn generate(
    State(state): State<AppState>,
    Form(inputs): Form<InputParameters>,
) -> Redirect {
    let mut session = state.session.lock().await;
    start_generation(&state, &mut session, inputs);
    landing(&session)
}

pub async fn api_generate(
    State(state): State<AppState>,
    Json(inputs): Json<InputParameters>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let mut session = state.session.lock().await;
    let status = if start_generation(&state, &mut session, inputs) {
        StatusCode::ACCEPTED
    } else {
        StatusCode::CONFLICT
    };
    (status, Json(session.snapshot()))
}

pub async fn set_view(
    State(state): State<AppState>,
    Form(request): Form<ViewRequest>,
) -> Redirect {
    let mut session = state.session.lock().await;
    session.set_view_mode(request.mode);
    landing(&session)
}

/// Records a copy the browser already wrote to its clipboard.
pub async fn api_copy(State(state): State<AppState>) -> Result<Json<CopyResponse>, ApiError> {
    let mut session = state.session.lock().await;
    let copied = match session.copy_output(state.clipboard.as_ref()) {
        Ok(copied) => copied,
        Err(e) => {
            error!("Failed to record copy: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Copy error: {}", e),
                }),
            ));
        }
    };

    let ack_ms = session
        .view()
        .copied_remaining()
        .map(|left| left.as_millis() as u64)
        .unwrap_or_default();
    if copied {
        let bytes = state.clipboard.last_copied().map(|t| t.len()).unwrap_or_default();
        info!("Copy recorded ({} bytes)", bytes);
    } else {
        info!("Copy requested with no output to copy");
    }

    Ok(Json(CopyResponse { copied, ack_ms }))
}

/// Stores field edits made while a generation was running. The in-flight
/// generation keeps the inputs it was started with.
pub async fn api_fields(
    State(state): State<AppState>,
    Form(inputs): Form<InputParameters>,
) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.edit_fields(inputs);
    Json(session.snapshot())
}

pub async fn api_state(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.lock().await.snapshot())
}

pub async fn health() -> &'static str {
    "ok"
}

/// Runs the submit transition under the session lock and spawns the
/// outbound call. Returns whether a generation was started.
fn start_generation(state: &AppState, session: &mut Session, inputs: InputParameters) -> bool {
    let Some(pending) = session.submit(inputs) else {
        return false;
    };

    let generator = state.generator.clone();
    let shared = state.session.clone();
    let span = info_span!("generation", id = %pending.id);

    tokio::spawn(
        async move {
            let result = generator.generate(&pending.inputs).await;
            shared.lock().await.finish(pending.id, result);
        }
        .instrument(span),
    );

    true
}

fn landing(session: &Session) -> Redirect {
    let form = session.form();
    if form.is_generating() || !form.output().is_empty() {
        Redirect::to("/#result-area")
    } else {
        Redirect::to("/")
    }
}
