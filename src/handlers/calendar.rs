use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::handlers::extract::AppPath;
use crate::models::CalendarCell;
use crate::services::calendar::{month_grid, next_month, previous_month};
use crate::state::AppState;

#[derive(Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub previous: (i32, u32),
    pub next: (i32, u32),
    pub cells: Vec<CalendarCell>,
}

// GET /api/calendar/:year/:month
pub async fn month(
    State(state): State<Arc<AppState>>,
    AppPath((year, month)): AppPath<(i32, u32)>,
) -> Result<Json<MonthView>, AppError> {
    let cells = month_grid(year, month, state.clock.today())?;
    Ok(Json(MonthView {
        year,
        month,
        previous: previous_month(year, month),
        next: next_month(year, month),
        cells,
    }))
}
