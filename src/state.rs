use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::models::BookingDraft;
use crate::services::availability::AvailabilitySimulator;
use crate::services::clock::{Clock, DemoRng};
use crate::services::i18n::Lang;
use crate::services::notifications::NotificationCenter;
use crate::services::payments::PaymentGateway;
use crate::services::storage::Storage;

pub struct AppState {
    pub config: AppConfig,
    pub storage: Box<dyn Storage>,
    pub clock: Box<dyn Clock>,
    pub rng: DemoRng,
    pub availability: AvailabilitySimulator,
    pub payments: Box<dyn PaymentGateway>,
    pub notifications: NotificationCenter,
    /// Open booking wizards, keyed by draft id. Memory only.
    pub drafts: Mutex<HashMap<String, BookingDraft>>,
}

impl AppState {
    pub fn default_lang(&self) -> Lang {
        Lang::parse(&self.config.default_lang).unwrap_or_default()
    }

    pub fn lang(&self, requested: Option<&str>) -> Lang {
        Lang::parse_or(requested, self.default_lang())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::NaiveDateTime;

    use super::*;
    use crate::services::clock::FixedClock;
    use crate::services::notifications::notifier::LogNotifier;
    use crate::services::payments::simulated::SimulatedGateway;
    use crate::services::storage::MemoryStorage;

    pub fn config() -> AppConfig {
        AppConfig {
            port: 3000,
            database_url: ":memory:".to_string(),
            business_name: "Nailed It Studio".to_string(),
            whatsapp_phone: "15555550123".to_string(),
            default_lang: "en".to_string(),
            payment_delay_ms: 0,
            chat_typing_delay_ms: 0,
            notification_stagger_ms: 0,
            draft_ttl_minutes: 120,
            demo_seed: Some(11),
        }
    }

    /// Monday 2025-06-16 09:00, in-memory storage, every slot open.
    pub fn state() -> AppState {
        state_with_clock().0
    }

    /// Same as `state`, with a handle for moving the clock.
    pub fn state_with_clock() -> (AppState, Arc<FixedClock>) {
        let now = NaiveDateTime::parse_from_str("2025-06-16 09:00", "%Y-%m-%d %H:%M").unwrap();
        let clock = Arc::new(FixedClock::new(now));
        let state = AppState {
            config: config(),
            storage: Box::new(MemoryStorage::new()),
            clock: Box::new(clock.clone()),
            rng: DemoRng::new(Some(11)),
            availability: AvailabilitySimulator::new(1.0),
            payments: Box::new(SimulatedGateway::new(Duration::ZERO)),
            notifications: NotificationCenter::new(Box::new(LogNotifier), Duration::ZERO),
            drafts: Mutex::new(HashMap::new()),
        };
        (state, clock)
    }
}
