//! HTTP transport — REST endpoints for the chat API.
//!
//! `POST /chatbot` takes `{"user_input": "...", "session_id": "..."}` and
//! returns `{"response": "...", "topic": ..., "phase": ...}`. The session
//! id is optional; callers that omit it share the `"default"` session.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::router;
use crate::state::{SessionStore, TopicId};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
}

/// Inbound chat turn.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Free text; may be empty.
    #[serde(default)]
    pub user_input: String,
    /// Conversation key; defaults to `"default"` when absent.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Outbound chat turn: the response text plus a snapshot of where the
/// conversation now stands.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub topic: Option<TopicId>,
    pub phase: u8,
}

/// Build the Axum router for the chat API.
///
/// CORS is wide open: the reference client is a mobile/web app served
/// from a different origin.
pub fn chat_routes(sessions: SessionStore) -> Router {
    Router::new()
        .route("/chatbot", post(chatbot))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(AppState { sessions })
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "flowbot"
    }))
}

async fn chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let session_id = request.session_id.as_deref().unwrap_or("default");
    let session = state.sessions.session(session_id).await;
    let mut conversation = session.lock().await;

    let response = router::respond(&mut conversation, &request.user_input);
    info!(
        session = %session_id,
        topic = ?conversation.topic,
        phase = conversation.phase,
        "turn handled"
    );

    Json(ChatResponse {
        response,
        topic: conversation.topic,
        phase: conversation.phase,
    })
}
