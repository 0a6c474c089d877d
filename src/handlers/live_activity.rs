use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::services::social_proof::{live_activity, LiveActivity};
use crate::state::AppState;

// GET /api/live-activity
pub async fn get_live_activity(State(state): State<Arc<AppState>>) -> Json<LiveActivity> {
    let now = state.clock.now();
    Json(state.rng.with(|rng| live_activity(rng, now)))
}
