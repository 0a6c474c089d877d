use chrono::NaiveDate;
use rand::Rng;

use crate::models::TimeSlot;
use crate::services::calendar;
use crate::services::clock::DemoRng;

pub const SLOT_TIMES: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
];

pub const DEFAULT_OPEN_PROBABILITY: f64 = 0.7;

/// Placeholder availability. Every call rolls fresh dice; there is no schedule
/// behind it and a human confirms the real time over WhatsApp.
pub struct AvailabilitySimulator {
    probability: f64,
}

impl Default for AvailabilitySimulator {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_PROBABILITY)
    }
}

impl AvailabilitySimulator {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn slots_for(&self, rng: &DemoRng, date: NaiveDate, today: NaiveDate) -> Vec<TimeSlot> {
        if calendar::is_closed(date) || date < today {
            return Vec::new();
        }

        rng.with(|rng| {
            SLOT_TIMES
                .iter()
                .map(|time| TimeSlot {
                    id: slot_id(date, time),
                    time: time.to_string(),
                    label: label_for(time),
                    available: rng.random_bool(self.probability),
                })
                .collect()
        })
    }
}

pub fn slot_id(date: NaiveDate, time: &str) -> String {
    format!("{}T{}", date.format("%Y-%m-%d"), time.replace(':', ""))
}

/// "13:00" -> "1:00 PM"
pub fn label_for(time: &str) -> String {
    let (h, m) = time.split_once(':').unwrap_or((time, "00"));
    let hour: u32 = h.parse().unwrap_or(0);
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display}:{m} {suffix}")
}
