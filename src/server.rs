//! HTTP inference service.
//!
//! Routes:
//!
//! - `GET /` answers with a short plain-text hint.
//! - `POST /api` takes `{"text": "..."}` and answers `{"label": "..."}`.
//! - `POST /reload` (only when enabled) reloads the params file and swaps
//!   the model in.
//!
//! Failures are answered with `{"error": {"kind": ..., "message": ...}}` and
//! a non-200 status derived from the error kind.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::error::{ErrorKind, Result, SentimentError};
use crate::model::{Label, ModelStore, NaiveBayesClassifier, SentimentClassifier};

/// Plain-text answer of the root route.
pub const INDEX_MESSAGE: &str = "Please POST your text!";

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub params_path: PathBuf,
    /// Expose `POST /reload`.
    pub allow_reload: bool,
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<NaiveBayesClassifier>,
    params_path: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<ModelStore>, params_path: PathBuf) -> Self {
        AppState {
            classifier: Arc::new(NaiveBayesClassifier::new(store)),
            params_path,
        }
    }

    pub fn store(&self) -> &Arc<ModelStore> {
        self.classifier.store()
    }
}

/// Body of a successful classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub label: Label,
}

/// Build the router over `state`.
pub fn router(state: AppState, allow_reload: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/api", post(classify));
    if allow_reload {
        router = router.route("/reload", post(reload));
    }
    router.with_state(state)
}

/// Load the model, bind, and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let store = Arc::new(ModelStore::open(&config.params_path)?);
    let state = AppState::new(store, config.params_path.clone());
    let app = router(state, config.allow_reload);

    let listener = TcpListener::bind(config.bind).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> &'static str {
    INDEX_MESSAGE
}

async fn classify(State(state): State<AppState>, body: Bytes) -> Response {
    match classify_body(state.classifier.as_ref(), &body) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn reload(State(state): State<AppState>) -> Response {
    match state.store().reload(&state.params_path) {
        Ok(model) => (
            StatusCode::OK,
            axum::Json(json!({ "vocabulary": model.vocabulary_size() })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Parse a request body and classify its `text`.
///
/// Bodies that are not a JSON object with a string `text` field are
/// rejected as `InvalidInput` before the classifier is consulted.
pub fn classify_body<C>(classifier: &C, body: &[u8]) -> Result<ClassifyResponse>
where
    C: SentimentClassifier + ?Sized,
{
    let request: Value = serde_json::from_slice(body)
        .map_err(|e| SentimentError::invalid_input(format!("bad request body: {e}")))?;
    let text = request.get("text").and_then(Value::as_str).ok_or_else(|| {
        SentimentError::invalid_input("request body must be an object with a string \"text\" field")
    })?;
    let label = classifier.predict(text)?;
    Ok(ClassifyResponse { label })
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::ModelNotTrained => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::MalformedParams | ErrorKind::IoFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: SentimentError) -> Response {
    let kind = err.kind();
    let status = status_for(kind);
    if status.is_server_error() {
        error!("request failed: {err}");
    } else {
        warn!("request rejected: {err}");
    }
    let body = json!({ "error": { "kind": kind, "message": err.to_string() } });
    (status, axum::Json(body)).into_response()
}
