//! Fake social proof for the marketing widgets. Demo data only.

use chrono::{Duration, NaiveDateTime};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::service::CATALOG;

const FIRST_NAMES: &[&str] = &[
    "Ana", "Sofía", "Maya", "Jasmine", "Chloe", "Valentina", "Priya", "Emma", "Lucía", "Zoe",
];

const CITIES: &[&str] = &["Downtown", "Westside", "Riverside", "Midtown", "Old Town"];

pub const MIN_VIEWERS: u32 = 3;
pub const MAX_VIEWERS: u32 = 18;
pub const FEED_LEN: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub name: &'static str,
    pub city: &'static str,
    pub service: &'static str,
    pub minutes_ago: i64,
    pub at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct LiveActivity {
    pub viewers: u32,
    pub recent: Vec<ActivityEntry>,
    pub demo: bool,
}

pub fn live_activity(rng: &mut impl Rng, now: NaiveDateTime) -> LiveActivity {
    let viewers = rng.random_range(MIN_VIEWERS..=MAX_VIEWERS);

    let mut recent: Vec<ActivityEntry> = (0..FEED_LEN)
        .map(|_| {
            let minutes_ago = rng.random_range(2..=45);
            ActivityEntry {
                name: FIRST_NAMES.choose(rng).copied().unwrap_or("Someone"),
                city: CITIES.choose(rng).copied().unwrap_or("Downtown"),
                service: CATALOG.choose(rng).map(|s| s.name).unwrap_or("a manicure"),
                minutes_ago,
                at: now - Duration::minutes(minutes_ago),
            }
        })
        .collect();
    recent.sort_by_key(|e| e.minutes_ago);

    LiveActivity {
        viewers,
        recent,
        demo: true,
    }
}
