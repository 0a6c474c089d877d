use chrono::{Duration, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::clock::Clock;
use crate::services::storage::Storage;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BannerKind {
    InstallPrompt,
    NotificationPrompt,
    Urgency,
    Referral,
}

impl BannerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerKind::InstallPrompt => "install_prompt",
            BannerKind::NotificationPrompt => "notification_prompt",
            BannerKind::Urgency => "urgency",
            BannerKind::Referral => "referral",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "install_prompt" => Ok(BannerKind::InstallPrompt),
            "notification_prompt" => Ok(BannerKind::NotificationPrompt),
            "urgency" => Ok(BannerKind::Urgency),
            "referral" => Ok(BannerKind::Referral),
            other => Err(AppError::NotFound(format!("banner {other}"))),
        }
    }

    pub fn cooldown(&self) -> Duration {
        match self {
            BannerKind::InstallPrompt => Duration::days(7),
            BannerKind::NotificationPrompt => Duration::days(3),
            BannerKind::Urgency => Duration::hours(24),
            BannerKind::Referral => Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerState {
    pub banner: BannerKind,
    pub visible: bool,
    pub dismissed_at: Option<NaiveDateTime>,
    pub visible_again_at: Option<NaiveDateTime>,
}

fn key(kind: BannerKind, client_id: &str) -> String {
    format!("banner:{}:{client_id}", kind.as_str())
}

fn dismissed_at(storage: &dyn Storage, kind: BannerKind, client_id: &str) -> Option<NaiveDateTime> {
    let raw = match storage.get(&key(kind, client_id)) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::error!(error = %e, banner = kind.as_str(), "failed to read banner state");
            return None;
        }
    };
    match NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts),
        Err(_) => {
            tracing::warn!(banner = kind.as_str(), raw = %raw, "ignoring unreadable dismissal timestamp");
            None
        }
    }
}

pub fn state(
    storage: &dyn Storage,
    clock: &dyn Clock,
    kind: BannerKind,
    client_id: &str,
) -> BannerState {
    let dismissed_at = dismissed_at(storage, kind, client_id);
    let visible_again_at = dismissed_at.map(|ts| ts + kind.cooldown());
    let visible = match visible_again_at {
        Some(until) => clock.now() >= until,
        None => true,
    };

    BannerState {
        banner: kind,
        visible,
        dismissed_at,
        visible_again_at,
    }
}

pub fn dismiss(
    storage: &dyn Storage,
    clock: &dyn Clock,
    kind: BannerKind,
    client_id: &str,
) -> BannerState {
    let now = clock.now().trunc_subsecs(0);
    let stamp = now.format(TIMESTAMP_FORMAT).to_string();
    if let Err(e) = storage.set(&key(kind, client_id), &stamp) {
        // still hidden for this response; the next read shows it again
        tracing::error!(error = %e, banner = kind.as_str(), "failed to persist dismissal");
    }
    BannerState {
        banner: kind,
        visible: false,
        dismissed_at: Some(now),
        visible_again_at: Some(now + kind.cooldown()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use crate::services::storage::MemoryStorage;

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDateTime::parse_from_str("2025-06-16 10:00:00", TIMESTAMP_FORMAT).unwrap(),
        )
    }

    #[test]
    fn test_visible_until_dismissed() {
        let storage = MemoryStorage::new();
        let clock = clock();
        assert!(state(&storage, &clock, BannerKind::InstallPrompt, "ana").visible);
        assert!(!dismiss(&storage, &clock, BannerKind::InstallPrompt, "ana").visible);
    }

    #[test]
    fn test_install_prompt_hidden_for_seven_days() {
        let storage = MemoryStorage::new();
        let clock = clock();
        dismiss(&storage, &clock, BannerKind::InstallPrompt, "ana");

        clock.advance(Duration::days(6) + Duration::hours(23));
        assert!(!state(&storage, &clock, BannerKind::InstallPrompt, "ana").visible);

        clock.advance(Duration::hours(1));
        assert!(state(&storage, &clock, BannerKind::InstallPrompt, "ana").visible);
    }

    #[test]
    fn test_dismissal_survives_new_storage_handle() {
        use crate::db;
        use crate::services::storage::SqliteStorage;
        use std::sync::{Arc, Mutex};

        let conn = Arc::new(Mutex::new(db::init_db(":memory:").unwrap()));
        let clock = clock();
        dismiss(&SqliteStorage::new(conn.clone()), &clock, BannerKind::Urgency, "ana");

        // a "reload": fresh storage handle over the same database
        let reloaded = SqliteStorage::new(conn);
        clock.advance(Duration::hours(12));
        assert!(!state(&reloaded, &clock, BannerKind::Urgency, "ana").visible);
        clock.advance(Duration::hours(12));
        assert!(state(&reloaded, &clock, BannerKind::Urgency, "ana").visible);
    }

    #[test]
    fn test_banners_are_independent() {
        let storage = MemoryStorage::new();
        let clock = clock();
        dismiss(&storage, &clock, BannerKind::Urgency, "ana");
        assert!(state(&storage, &clock, BannerKind::InstallPrompt, "ana").visible);
        assert!(state(&storage, &clock, BannerKind::Urgency, "bea").visible);
    }

    #[test]
    fn test_corrupt_timestamp_counts_as_not_dismissed() {
        let storage = MemoryStorage::new();
        storage.set("banner:referral:ana", "yesterday-ish").unwrap();
        let st = state(&storage, &clock(), BannerKind::Referral, "ana");
        assert!(st.visible);
        assert!(st.dismissed_at.is_none());
    }

    #[test]
    fn test_dismiss_reports_hidden_when_write_fails() {
        use crate::services::storage::tests::BrokenStorage;

        let clock = clock();
        let st = dismiss(&BrokenStorage, &clock, BannerKind::NotificationPrompt, "ana");
        assert!(!st.visible);
        assert_eq!(st.dismissed_at, Some(clock.now()));
        assert_eq!(st.visible_again_at, Some(clock.now() + Duration::days(3)));
    }

    #[test]
    fn test_dismiss_matches_stored_state() {
        let storage = MemoryStorage::new();
        let clock = clock();
        let dismissed = dismiss(&storage, &clock, BannerKind::Referral, "ana");
        let read = state(&storage, &clock, BannerKind::Referral, "ana");
        assert_eq!(dismissed.dismissed_at, read.dismissed_at);
        assert_eq!(dismissed.visible_again_at, read.visible_again_at);
        assert_eq!(dismissed.visible, read.visible);
    }

    #[test]
    fn test_parse_unknown_banner() {
        assert!(BannerKind::parse("popup").is_err());
        assert_eq!(BannerKind::parse("urgency").unwrap(), BannerKind::Urgency);
    }
}
