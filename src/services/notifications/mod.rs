pub mod notifier;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::broadcast;
use tokio::task::{AbortHandle, JoinHandle};

use crate::models::{Notification, NotificationPermission};
use crate::services::storage::{load_json, save_json, update_json, Storage};
use crate::state::AppState;

use notifier::Notifier;

pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationDraft {
    pub title: String,
    pub body: String,
}

fn history_key(client_id: &str) -> String {
    format!("notifications:{client_id}")
}

fn permission_key(client_id: &str) -> String {
    format!("notification-permission:{client_id}")
}

pub struct NotificationCenter {
    notifier: Box<dyn Notifier>,
    stagger: Duration,
    tx: broadcast::Sender<Notification>,
    pending: Mutex<HashMap<String, Vec<AbortHandle>>>,
}

impl NotificationCenter {
    pub fn new(notifier: Box<dyn Notifier>, stagger: Duration) -> Self {
        let (tx, _) = broadcast::channel(256);
        Self {
            notifier,
            stagger,
            tx,
            pending: Mutex::new(HashMap::new()),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Prepends to the client's history, newest first, capped at `HISTORY_LIMIT`.
    fn record(&self, storage: &dyn Storage, notification: &Notification) {
        let key = history_key(&notification.client_id);
        update_json(storage, &key, |history: &mut Vec<Notification>| {
            history.insert(0, notification.clone());
            history.truncate(HISTORY_LIMIT);
        });
    }

    /// Finished handles are pruned for every client, and clients left with
    /// none are dropped from the map.
    fn track(&self, client_id: &str, handle: AbortHandle) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|_, handles| {
            handles.retain(|h| !h.is_finished());
            !handles.is_empty()
        });
        pending.entry(client_id.to_string()).or_default().push(handle);
    }

    #[cfg(test)]
    fn pending_clients(&self) -> usize {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Aborts every scheduled notification for the client that has not fired yet.
    pub fn cancel_pending(&self, client_id: &str) -> usize {
        let handles = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(client_id)
            .unwrap_or_default();

        let mut cancelled = 0;
        for handle in handles {
            if !handle.is_finished() {
                handle.abort();
                cancelled += 1;
            }
        }
        if cancelled > 0 {
            tracing::info!(client_id, cancelled, "cancelled pending notifications");
        }
        cancelled
    }
}

pub fn history(storage: &dyn Storage, client_id: &str) -> Vec<Notification> {
    load_json(storage, &history_key(client_id))
}

pub fn permission(storage: &dyn Storage, client_id: &str) -> NotificationPermission {
    load_json(storage, &permission_key(client_id))
}

pub fn set_permission(storage: &dyn Storage, client_id: &str, permission: NotificationPermission) {
    save_json(storage, &permission_key(client_id), &permission);
}

pub fn mark_all_read(storage: &dyn Storage, client_id: &str) -> Vec<Notification> {
    update_json(storage, &history_key(client_id), |history: &mut Vec<Notification>| {
        for n in history.iter_mut() {
            n.is_read = true;
        }
        history.clone()
    })
}

/// Records the notification and, when the client granted permission, pushes it
/// through the system notifier.
pub async fn deliver(state: &AppState, client_id: &str, draft: NotificationDraft) -> Notification {
    let notification = Notification {
        id: uuid::Uuid::new_v4().to_string(),
        client_id: client_id.to_string(),
        title: draft.title,
        body: draft.body,
        is_read: false,
        created_at: state.clock.now(),
    };

    state.notifications.record(state.storage.as_ref(), &notification);

    // No subscribers is fine
    let _ = state.notifications.tx.send(notification.clone());

    match permission(state.storage.as_ref(), client_id) {
        NotificationPermission::Granted => {
            if let Err(e) = state.notifications.notifier.notify(&notification).await {
                tracing::error!(error = %e, client_id, "failed to deliver notification");
            }
        }
        other => {
            tracing::debug!(client_id, permission = ?other, "notification recorded without delivery");
        }
    }

    notification
}

/// Fires the drafts one after another, `stagger` apart, the first immediately.
pub fn schedule(
    state: &Arc<AppState>,
    client_id: &str,
    drafts: Vec<NotificationDraft>,
) -> Vec<JoinHandle<()>> {
    let stagger = state.notifications.stagger;
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| {
            let task_state = Arc::clone(state);
            let client = client_id.to_string();
            let delay = stagger * i as u32;
            let handle = tokio::spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                deliver(&task_state, &client, draft).await;
            });
            state.notifications.track(client_id, handle.abort_handle());
            handle
        })
        .collect()
}
