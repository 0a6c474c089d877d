use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::service;
use crate::services::i18n::Lang;
use crate::services::whatsapp::MessageBuilder;

pub const MAX_QUANTITY: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct LineItemRequest {
    pub service_id: String,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    pub service_id: &'static str,
    pub name: &'static str,
    pub price_label: String,
    pub unit_cents: u64,
    pub quantity: u32,
    pub subtotal_cents: u64,
}

/// Running estimate built from service midpoints.
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    items: Vec<LineItem>,
}

impl PriceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding a service that is already present merges the quantities.
    pub fn add(&mut self, service_id: &str, quantity: u32) -> Result<(), AppError> {
        let current = self
            .items
            .iter()
            .find(|i| i.service_id == service_id)
            .map(|i| i.quantity)
            .unwrap_or(0);
        self.set_quantity(service_id, current.saturating_add(quantity))
    }

    /// A quantity of zero removes the line.
    pub fn set_quantity(&mut self, service_id: &str, quantity: u32) -> Result<(), AppError> {
        let svc = service::find(service_id)
            .ok_or_else(|| AppError::NotFound(format!("service {service_id}")))?;
        if quantity > MAX_QUANTITY {
            return Err(AppError::Validation(format!(
                "quantity for {service_id} must be at most {MAX_QUANTITY}"
            )));
        }
        if quantity == 0 {
            self.remove(service_id);
            return Ok(());
        }

        let unit = svc.midpoint_cents();
        let line = LineItem {
            service_id: svc.id,
            name: svc.name,
            price_label: svc.price_label(),
            unit_cents: unit,
            quantity,
            subtotal_cents: unit * quantity as u64,
        };
        match self.items.iter_mut().find(|i| i.service_id == svc.id) {
            Some(existing) => *existing = line,
            None => self.items.push(line),
        }
        Ok(())
    }

    pub fn remove(&mut self, service_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.service_id != service_id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total_cents(&self) -> u64 {
        self.items.iter().map(|i| i.subtotal_cents).sum()
    }

    pub fn quote_message(&self, lang: Lang, name: Option<&str>) -> String {
        let mut msg = MessageBuilder::new(lang, "wa.quote.header").field_opt("label.name", name);
        for item in &self.items {
            msg = msg.line(format!("• {} × {} ({})", item.quantity, item.name, item.price_label));
        }
        msg.blank()
            .field("label.total", format_cents(self.total_cents()))
            .build()
    }
}

pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
