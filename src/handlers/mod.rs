pub mod availability;
pub mod banners;
pub mod bookings;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod extract;
pub mod favorites;
pub mod gallery;
pub mod gift_cards;
pub mod health;
pub mod i18n;
pub mod live_activity;
pub mod notifications;
pub mod pricing;
pub mod referrals;
pub mod try_on;
pub mod whatsapp;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/services", get(catalog::list_services))
        .route("/api/calendar/:year/:month", get(calendar::month))
        .route("/api/availability/:date", get(availability::day))
        .route("/api/bookings/drafts", post(bookings::create_draft))
        .route(
            "/api/bookings/drafts/:id",
            get(bookings::get_draft).delete(bookings::discard_draft),
        )
        .route(
            "/api/bookings/drafts/:id/service",
            post(bookings::select_service),
        )
        .route("/api/bookings/drafts/:id/date", post(bookings::select_date))
        .route("/api/bookings/drafts/:id/time", post(bookings::select_time))
        .route("/api/bookings/drafts/:id/back", post(bookings::back))
        .route(
            "/api/bookings/drafts/:id/payment",
            post(bookings::submit_payment),
        )
        .route("/api/bookings/drafts/:id/pay", post(bookings::pay))
        .route("/api/whatsapp/inquiry", post(whatsapp::inquiry))
        .route("/api/i18n/:lang/:key", get(i18n::lookup))
        .route("/api/favorites/:client", get(favorites::list))
        .route(
            "/api/favorites/:client/:item/toggle",
            post(favorites::toggle),
        )
        .route("/api/banners/:client/:banner", get(banners::get_state))
        .route(
            "/api/banners/:client/:banner/dismiss",
            post(banners::dismiss),
        )
        .route("/api/pricing/quote", post(pricing::quote))
        .route("/api/gift-cards/tiers", get(gift_cards::tiers))
        .route("/api/gift-cards/purchase", post(gift_cards::purchase))
        .route("/api/referrals", post(referrals::create))
        .route(
            "/api/notifications/events",
            get(notifications::events_stream),
        )
        .route("/api/notifications/:client", get(notifications::list))
        .route(
            "/api/notifications/:client/permission",
            post(notifications::set_permission),
        )
        .route(
            "/api/notifications/:client/read-all",
            post(notifications::mark_all_read),
        )
        .route(
            "/api/notifications/:client/pending",
            delete(notifications::cancel_pending),
        )
        .route("/api/chat", post(chat::chat))
        .route("/api/gallery", get(gallery::search_gallery))
        .route("/api/gallery/fusion", post(gallery::fusion))
        .route("/api/gallery/:id/inquiry", get(gallery::inquiry))
        .route(
            "/api/try-on/:client",
            get(try_on::history)
                .post(try_on::record)
                .delete(try_on::clear),
        )
        .route("/api/live-activity", get(live_activity::get_live_activity))
        .with_state(state)
}
