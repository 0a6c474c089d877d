use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{Service, TimeSlot};
use crate::services::i18n::Lang;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Service,
    DateTime,
    Payment,
    Confirmation,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Service => "service",
            WizardStep::DateTime => "date_time",
            WizardStep::Payment => "payment",
            WizardStep::Confirmation => "confirmation",
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            WizardStep::Service | WizardStep::DateTime => WizardStep::Service,
            WizardStep::Payment => WizardStep::DateTime,
            WizardStep::Confirmation => WizardStep::Confirmation,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Card-like text fields. Only presence is checked; nothing here is a real card.
#[derive(Clone, Default, Deserialize)]
pub struct CardDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cvc: String,
}

impl CardDetails {
    pub fn last4(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("name", &self.name)
            .field("last4", &self.last4())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingDraft {
    pub id: String,
    pub client_id: String,
    pub lang: Lang,
    pub step: WizardStep,
    pub service: Option<&'static Service>,
    pub date: Option<NaiveDate>,
    pub slots: Vec<TimeSlot>,
    pub time: Option<String>,
    pub contact: ContactDetails,
    #[serde(skip)]
    pub card: CardDetails,
    pub card_last4: Option<String>,
    /// Set while the simulated payment is in flight.
    pub processing: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub reference: String,
    pub service: String,
    pub date: NaiveDate,
    pub time: String,
    pub deposit_amount: u32,
    pub card_last4: String,
    pub whatsapp_url: String,
}
