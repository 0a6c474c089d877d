use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GiftCardTier {
    pub id: &'static str,
    pub name: &'static str,
    pub amount: u32,
    pub perk: &'static str,
}

pub const TIERS: &[GiftCardTier] = &[
    GiftCardTier {
        id: "pink-petal",
        name: "Pink Petal",
        amount: 25,
        perk: "A classic manicure treat",
    },
    GiftCardTier {
        id: "rose-glow",
        name: "Rose Glow",
        amount: 50,
        perk: "Gel manicure with a little extra",
    },
    GiftCardTier {
        id: "gold-goddess",
        name: "Gold Goddess",
        amount: 100,
        perk: "Mani + pedi with nail art",
    },
    GiftCardTier {
        id: "diamond-diva",
        name: "Diamond Diva",
        amount: 200,
        perk: "The full pampering experience",
    },
];

pub fn find(id: &str) -> Option<&'static GiftCardTier> {
    TIERS.iter().find(|t| t.id == id)
}
