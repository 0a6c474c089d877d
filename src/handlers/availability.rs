use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::TimeSlot;
use crate::services::calendar::is_closed;
use crate::state::AppState;

#[derive(Serialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub closed: bool,
    pub slots: Vec<TimeSlot>,
}

// GET /api/availability/:date
pub async fn day(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<Json<DayAvailability>, AppError> {
    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date {raw:?}, expected YYYY-MM-DD")))?;

    let slots = state
        .availability
        .slots_for(&state.rng, date, state.clock.today());

    Ok(Json(DayAvailability {
        date,
        closed: is_closed(date),
        slots,
    }))
}
