use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::extract::AppJson;
use crate::models::{BookingDraft, CardDetails, Confirmation, ContactDetails};
use crate::services::booking;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateDraftRequest {
    pub client_id: String,
    pub lang: Option<String>,
}

// POST /api/bookings/drafts
pub async fn create_draft(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CreateDraftRequest>,
) -> Result<(StatusCode, Json<BookingDraft>), AppError> {
    let lang = state.lang(body.lang.as_deref());
    let draft = booking::create(&state, &body.client_id, lang)?;
    Ok((StatusCode::CREATED, Json(draft)))
}

// GET /api/bookings/drafts/:id
pub async fn get_draft(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingDraft>, AppError> {
    Ok(Json(booking::get(&state, &id)?))
}

// DELETE /api/bookings/drafts/:id
pub async fn discard_draft(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    booking::discard(&state, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ServiceChoice {
    pub service_id: String,
}

// POST /api/bookings/drafts/:id/service
pub async fn select_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(body): AppJson<ServiceChoice>,
) -> Result<Json<BookingDraft>, AppError> {
    Ok(Json(booking::select_service(&state, &id, &body.service_id)?))
}

#[derive(Deserialize)]
pub struct DateChoice {
    pub date: NaiveDate,
}

// POST /api/bookings/drafts/:id/date
pub async fn select_date(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(body): AppJson<DateChoice>,
) -> Result<Json<BookingDraft>, AppError> {
    Ok(Json(booking::select_date(&state, &id, body.date)?))
}

#[derive(Deserialize)]
pub struct TimeChoice {
    pub slot_id: String,
}

// POST /api/bookings/drafts/:id/time
pub async fn select_time(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(body): AppJson<TimeChoice>,
) -> Result<Json<BookingDraft>, AppError> {
    Ok(Json(booking::select_time(&state, &id, &body.slot_id)?))
}

// POST /api/bookings/drafts/:id/back
pub async fn back(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingDraft>, AppError> {
    Ok(Json(booking::back(&state, &id)?))
}

#[derive(Deserialize)]
pub struct PaymentDetails {
    #[serde(default)]
    pub contact: ContactDetails,
    #[serde(default)]
    pub card: CardDetails,
}

// POST /api/bookings/drafts/:id/payment
pub async fn submit_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(body): AppJson<PaymentDetails>,
) -> Result<Json<BookingDraft>, AppError> {
    Ok(Json(booking::submit_payment(
        &state,
        &id,
        body.contact,
        body.card,
    )?))
}

// POST /api/bookings/drafts/:id/pay
pub async fn pay(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, AppError> {
    Ok(Json(booking::pay(&state, &id).await?))
}
