//! The four-step booking wizard: service → date/time → payment → confirmation.
//!
//! Drafts live only in `AppState::drafts` and vanish on discard or restart. A
//! "confirmed" booking is a WhatsApp message; the salon manages its real
//! calendar by hand. Drafts left open longer than `draft_ttl_minutes` are
//! swept the next time any draft is touched.

use std::collections::HashMap;
use std::sync::{Arc, MutexGuard, PoisonError};

use chrono::{Duration, NaiveDate};

use crate::errors::AppError;
use crate::models::{service, BookingDraft, CardDetails, Confirmation, ContactDetails, WizardStep};
use crate::services::calendar;
use crate::services::i18n::{translate, translate_with, Lang};
use crate::services::notifications::{self, NotificationDraft};
use crate::services::whatsapp::{self, BookingRequest};
use crate::state::AppState;

/// Locks the draft table with expired drafts already removed.
fn live_drafts(state: &AppState) -> MutexGuard<'_, HashMap<String, BookingDraft>> {
    let mut drafts = state.drafts.lock().unwrap_or_else(PoisonError::into_inner);
    let cutoff = state.clock.now() - Duration::minutes(state.config.draft_ttl_minutes);
    let before = drafts.len();
    drafts.retain(|_, d| d.created_at > cutoff);
    let expired = before - drafts.len();
    if expired > 0 {
        tracing::info!(expired, "expired booking drafts dropped");
    }
    drafts
}

pub fn create(state: &AppState, client_id: &str, lang: Lang) -> Result<BookingDraft, AppError> {
    let client_id = client_id.trim();
    if client_id.is_empty() {
        return Err(AppError::Validation("client_id is required".to_string()));
    }

    let draft = BookingDraft {
        id: uuid::Uuid::new_v4().to_string(),
        client_id: client_id.to_string(),
        lang,
        step: WizardStep::Service,
        service: None,
        date: None,
        slots: Vec::new(),
        time: None,
        contact: ContactDetails::default(),
        card: CardDetails::default(),
        card_last4: None,
        processing: false,
        created_at: state.clock.now(),
    };

    live_drafts(state).insert(draft.id.clone(), draft.clone());

    tracing::info!(draft_id = %draft.id, client_id, "booking draft opened");
    Ok(draft)
}

pub fn get(state: &AppState, id: &str) -> Result<BookingDraft, AppError> {
    live_drafts(state)
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("booking draft {id}")))
}

/// Closing the modal. Everything typed so far is dropped.
pub fn discard(state: &AppState, id: &str) -> Result<(), AppError> {
    let removed = live_drafts(state).remove(id);
    match removed {
        Some(draft) => {
            tracing::info!(draft_id = id, step = draft.step.as_str(), "booking draft discarded");
            Ok(())
        }
        None => Err(AppError::NotFound(format!("booking draft {id}"))),
    }
}

/// Applies `f` to a copy of the draft and stores it only if `f` succeeds, so a
/// rejected action leaves the draft exactly as it was.
fn update(
    state: &AppState,
    id: &str,
    f: impl FnOnce(&mut BookingDraft) -> Result<(), AppError>,
) -> Result<BookingDraft, AppError> {
    let mut drafts = live_drafts(state);
    let current = drafts
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("booking draft {id}")))?;

    let mut next = current.clone();
    f(&mut next)?;
    drafts.insert(id.to_string(), next.clone());
    Ok(next)
}

fn ensure_editable(draft: &BookingDraft) -> Result<(), AppError> {
    if draft.step == WizardStep::Confirmation {
        return Err(AppError::InvalidStep("booking is already confirmed".to_string()));
    }
    if draft.processing {
        return Err(AppError::InvalidStep("payment is processing".to_string()));
    }
    Ok(())
}

pub fn select_service(state: &AppState, id: &str, service_id: &str) -> Result<BookingDraft, AppError> {
    let svc = service::find(service_id)
        .ok_or_else(|| AppError::NotFound(format!("service {service_id}")))?;

    update(state, id, |d| {
        ensure_editable(d)?;
        d.service = Some(svc);
        d.step = WizardStep::DateTime;
        Ok(())
    })
}

pub fn select_date(state: &AppState, id: &str, date: NaiveDate) -> Result<BookingDraft, AppError> {
    let today = state.clock.today();
    if calendar::is_closed(date) {
        return Err(AppError::Validation(format!("we are closed on {}", date.format("%A"))));
    }
    if date < today {
        return Err(AppError::Validation(format!("{date} is in the past")));
    }

    let draft = update(state, id, |d| {
        ensure_editable(d)?;
        if d.service.is_none() {
            return Err(AppError::InvalidStep("choose a service first".to_string()));
        }
        d.slots = state.availability.slots_for(&state.rng, date, today);
        d.date = Some(date);
        d.time = None;
        d.step = WizardStep::DateTime;
        Ok(())
    })?;

    tracing::debug!(
        draft_id = id,
        %date,
        open = draft.slots.iter().filter(|s| s.available).count(),
        "generated slots"
    );
    Ok(draft)
}

/// Picking an unavailable (or unknown) slot is refused and changes nothing.
pub fn select_time(state: &AppState, id: &str, slot_id: &str) -> Result<BookingDraft, AppError> {
    update(state, id, |d| {
        ensure_editable(d)?;
        if d.date.is_none() {
            return Err(AppError::InvalidStep("choose a date first".to_string()));
        }
        let slot = d
            .slots
            .iter()
            .find(|s| s.id == slot_id)
            .filter(|s| s.available)
            .ok_or(AppError::SlotUnavailable)?;
        d.time = Some(slot.time.clone());
        d.step = WizardStep::Payment;
        Ok(())
    })
}

pub fn back(state: &AppState, id: &str) -> Result<BookingDraft, AppError> {
    update(state, id, |d| {
        ensure_editable(d)?;
        d.step = d.step.previous();
        Ok(())
    })
}

fn missing_fields(contact: &ContactDetails, card: &CardDetails) -> Vec<&'static str> {
    let required = [
        ("name", contact.name.as_str()),
        ("phone", contact.phone.as_str()),
        ("email", contact.email.as_str()),
        ("card name", card.name.as_str()),
        ("card number", card.number.as_str()),
        ("card expiry", card.expiry.as_str()),
        ("card cvc", card.cvc.as_str()),
    ];
    required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect()
}

/// Presence checks only. Nothing here looks like real card validation because
/// nothing is charged.
pub fn submit_payment(
    state: &AppState,
    id: &str,
    contact: ContactDetails,
    card: CardDetails,
) -> Result<BookingDraft, AppError> {
    let missing = missing_fields(&contact, &card);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    update(state, id, |d| {
        ensure_editable(d)?;
        if d.step != WizardStep::Payment {
            return Err(AppError::InvalidStep(format!(
                "payment details are entered at the payment step, not {}",
                d.step.as_str()
            )));
        }
        d.card_last4 = Some(card.last4());
        d.contact = contact;
        d.card = card;
        Ok(())
    })
}

pub async fn pay(state: &Arc<AppState>, id: &str) -> Result<Confirmation, AppError> {
    let draft = update(state, id, |d| {
        ensure_editable(d)?;
        if d.step != WizardStep::Payment {
            return Err(AppError::InvalidStep(format!(
                "cannot pay at step {}",
                d.step.as_str()
            )));
        }
        if !missing_fields(&d.contact, &d.card).is_empty() {
            return Err(AppError::Validation("payment details are incomplete".to_string()));
        }
        d.processing = true;
        Ok(())
    })?;

    let (Some(svc), Some(date), Some(time)) = (draft.service, draft.date, draft.time.clone()) else {
        set_processing(state, id, false);
        return Err(AppError::InvalidStep("service, date and time are required".to_string()));
    };
    let last4 = draft.card.last4();

    let receipt = match state.payments.charge(svc.deposit_amount, &last4).await {
        Ok(receipt) => receipt,
        Err(e) => {
            set_processing(state, id, false);
            tracing::warn!(draft_id = id, error = %e, "simulated payment failed");
            return Err(AppError::Payment(e.to_string()));
        }
    };

    // the modal may have been closed while "processing"
    update(state, id, |d| {
        d.processing = false;
        d.step = WizardStep::Confirmation;
        Ok(())
    })?;

    let time_label = draft
        .slots
        .iter()
        .find(|s| s.time == time)
        .map(|s| s.label.clone())
        .unwrap_or_else(|| time.clone());

    let message = whatsapp::booking_message(
        draft.lang,
        &BookingRequest {
            reference: &receipt.reference,
            service: svc.name,
            date,
            time_label: &time_label,
            deposit_amount: svc.deposit_amount,
            card_last4: &receipt.card_last4,
            contact: &draft.contact,
        },
    );
    let url = whatsapp::wa_link(&state.config.whatsapp_phone, &message)?;

    tracing::info!(
        draft_id = id,
        reference = %receipt.reference,
        service = svc.id,
        %date,
        time = %time,
        "booking handed off to whatsapp"
    );

    let date_label = whatsapp::format_date(date);
    let deposit = svc.deposit_amount.to_string();
    notifications::schedule(
        state,
        &draft.client_id,
        vec![
            NotificationDraft {
                title: translate(draft.lang, "notify.booking.title"),
                body: translate_with(
                    draft.lang,
                    "notify.booking.body",
                    &[("service", svc.name), ("date", &date_label), ("time", &time_label)],
                ),
            },
            NotificationDraft {
                title: translate(draft.lang, "notify.deposit.title"),
                body: translate_with(draft.lang, "notify.deposit.body", &[("deposit", &deposit)]),
            },
        ],
    );

    Ok(Confirmation {
        reference: receipt.reference,
        service: svc.name.to_string(),
        date,
        time: time_label,
        deposit_amount: svc.deposit_amount,
        card_last4: receipt.card_last4,
        whatsapp_url: url.to_string(),
    })
}

fn set_processing(state: &AppState, id: &str, processing: bool) {
    let mut drafts = live_drafts(state);
    if let Some(d) = drafts.get_mut(id) {
        d.processing = processing;
    }
}
