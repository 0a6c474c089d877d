use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use serde::Deserialize;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::handlers::extract::AppJson;
use crate::models::{Notification, NotificationPermission};
use crate::services::notifications;
use crate::state::AppState;

// GET /api/notifications/:client
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Json<serde_json::Value> {
    let history = notifications::history(state.storage.as_ref(), &client_id);
    let unread = history.iter().filter(|n| !n.is_read).count();
    Json(serde_json::json!({
        "permission": notifications::permission(state.storage.as_ref(), &client_id),
        "unread": unread,
        "notifications": history,
    }))
}

#[derive(Deserialize)]
pub struct PermissionRequest {
    pub permission: NotificationPermission,
}

// POST /api/notifications/:client/permission
pub async fn set_permission(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
    AppJson(body): AppJson<PermissionRequest>,
) -> Json<serde_json::Value> {
    notifications::set_permission(state.storage.as_ref(), &client_id, body.permission);
    tracing::info!(client_id = %client_id, permission = ?body.permission, "notification permission changed");
    Json(serde_json::json!({ "permission": body.permission }))
}

// POST /api/notifications/:client/read-all
pub async fn mark_all_read(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Json<Vec<Notification>> {
    Json(notifications::mark_all_read(state.storage.as_ref(), &client_id))
}

// DELETE /api/notifications/:client/pending
pub async fn cancel_pending(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Json<serde_json::Value> {
    let cancelled = state.notifications.cancel_pending(&client_id);
    Json(serde_json::json!({ "cancelled": cancelled }))
}

// GET /api/notifications/events
#[derive(Deserialize)]
pub struct EventsQuery {
    pub client: Option<String>,
}

pub async fn events_stream(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventsQuery>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let rx = state.notifications.subscribe();
    let client = query.client;

    let stream = BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(notification) => {
            if client.as_deref().is_some_and(|c| c != notification.client_id) {
                return None;
            }
            let data = serde_json::to_string(&notification).unwrap_or_default();
            Some(Ok(Event::default().data(data).event("notification")))
        }
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "notification stream lagged");
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(30)))
}
