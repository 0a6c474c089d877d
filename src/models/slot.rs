use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub id: String,
    /// 24-hour `HH:MM`.
    pub time: String,
    pub label: String,
    pub available: bool,
}
