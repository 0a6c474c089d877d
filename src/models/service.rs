use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    /// Whole dollars.
    pub price_min: u32,
    pub price_max: u32,
    pub duration_label: &'static str,
    pub deposit_amount: u32,
    pub description: &'static str,
}

impl Service {
    pub fn price_label(&self) -> String {
        if self.price_min == self.price_max {
            format!("${}", self.price_min)
        } else {
            format!("${}–${}", self.price_min, self.price_max)
        }
    }

    pub fn midpoint_cents(&self) -> u64 {
        (self.price_min as u64 + self.price_max as u64) * 50
    }
}

pub const CATALOG: &[Service] = &[
    Service {
        id: "classic-manicure",
        name: "Classic Manicure",
        price_min: 25,
        price_max: 35,
        duration_label: "30 min",
        deposit_amount: 10,
        description: "Shaping, cuticle care, hand massage and a regular polish of your choice.",
    },
    Service {
        id: "gel-manicure",
        name: "Gel Manicure",
        price_min: 40,
        price_max: 55,
        duration_label: "45 min",
        deposit_amount: 15,
        description: "Long-lasting gel color cured under LED, chip-free for up to three weeks.",
    },
    Service {
        id: "dip-powder",
        name: "Dip Powder",
        price_min: 45,
        price_max: 60,
        duration_label: "60 min",
        deposit_amount: 15,
        description: "Lightweight, durable dip system with a glossy finish.",
    },
    Service {
        id: "acrylic-full-set",
        name: "Acrylic Full Set",
        price_min: 55,
        price_max: 75,
        duration_label: "75 min",
        deposit_amount: 20,
        description: "Full set of sculpted acrylic extensions in any length and shape.",
    },
    Service {
        id: "gel-x-extensions",
        name: "Gel-X Extensions",
        price_min: 65,
        price_max: 90,
        duration_label: "90 min",
        deposit_amount: 25,
        description: "Soft-gel tips bonded for a natural look without the drilling.",
    },
    Service {
        id: "spa-pedicure",
        name: "Spa Pedicure",
        price_min: 45,
        price_max: 65,
        duration_label: "60 min",
        deposit_amount: 15,
        description: "Soak, exfoliation, mask, hot towels and polish.",
    },
    Service {
        id: "mani-pedi-combo",
        name: "Mani + Pedi Combo",
        price_min: 60,
        price_max: 85,
        duration_label: "90 min",
        deposit_amount: 20,
        description: "Classic manicure and spa pedicure in one visit.",
    },
    Service {
        id: "nail-art",
        name: "Custom Nail Art",
        price_min: 10,
        price_max: 30,
        duration_label: "15–30 min",
        deposit_amount: 5,
        description: "Hand-painted designs, chrome, foils and charms, priced per set.",
    },
];

pub fn find(id: &str) -> Option<&'static Service> {
    CATALOG.iter().find(|s| s.id == id)
}
