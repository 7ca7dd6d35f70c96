//! Message endpoints: save one, list the ten most recent

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::{Connection, PgConnection};

use crate::db::repos::{Message, MessageRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::MessageText;

/// Fixed window for the list endpoint.
const RECENT_LIMIT: i64 = 10;

/// Save message request
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub message: Option<String>,
}

/// Save message response
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub message: String,
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub text: String,
    pub time: String,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            text: m.content,
            time: m.created_at.to_rfc3339(),
        }
    }
}

/// POST /save - persist one message
///
/// The connection is acquired before the body is inspected: an unreachable
/// database answers 500 even when the body would also have been rejected.
async fn save_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let mut conn = state.db.connect().await?;
    let outcome = save_on(&mut conn, payload).await;
    close_quietly(conn).await;
    outcome
}

async fn save_on(
    conn: &mut PgConnection,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::NoJson)?;
    let text = MessageText::new(req.message.as_deref().unwrap_or(""))?;

    MessageRepo::new(conn).insert(text.as_str()).await?;

    Ok(Json(SaveResponse {
        status: "saved",
        message: text.into_string(),
    }))
}

/// GET /messages - the ten most recent messages, newest first
async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let mut conn = state.db.connect().await?;
    let outcome = MessageRepo::new(&mut conn).recent(RECENT_LIMIT).await;
    close_quietly(conn).await;

    let messages = outcome?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Close a request-scoped connection without affecting the response.
async fn close_quietly(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "error closing database connection");
    }
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/save", post(save_message))
        .route("/messages", get(list_messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn message_response_uses_wire_field_names() {
        let message = Message {
            id: 7,
            content: "hi".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(MessageResponse::from(message)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "text": "hi",
                "time": "2024-05-01T12:00:00+00:00"
            })
        );
    }

    #[test]
    fn save_request_tolerates_missing_field() {
        let req: SaveRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn save_response_shape() {
        let value = serde_json::to_value(SaveResponse {
            status: "saved",
            message: "note".into(),
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"status": "saved", "message": "note"})
        );
    }
}
