use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub trending: bool,
    pub image: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        id: "g01",
        title: "Chrome Glazed Donut",
        category: "gel",
        tags: &["chrome", "minimal", "pearl", "bridal"],
        colors: &["white", "pearl"],
        trending: true,
        image: "/gallery/chrome-glazed.jpg",
    },
    GalleryItem {
        id: "g02",
        title: "French Tip Remix",
        category: "acrylic",
        tags: &["french", "classic", "almond"],
        colors: &["white", "nude"],
        trending: false,
        image: "/gallery/french-remix.jpg",
    },
    GalleryItem {
        id: "g03",
        title: "Cherry Cola Cat Eye",
        category: "gel",
        tags: &["cat eye", "magnetic", "dark", "glossy"],
        colors: &["red", "burgundy"],
        trending: true,
        image: "/gallery/cherry-cat-eye.jpg",
    },
    GalleryItem {
        id: "g04",
        title: "Garden Party Florals",
        category: "nail art",
        tags: &["floral", "hand painted", "spring", "pastel"],
        colors: &["pink", "green", "yellow"],
        trending: false,
        image: "/gallery/garden-florals.jpg",
    },
    GalleryItem {
        id: "g05",
        title: "Milky Nude Ombré",
        category: "dip",
        tags: &["ombre", "natural", "minimal", "office"],
        colors: &["nude", "pink"],
        trending: false,
        image: "/gallery/milky-ombre.jpg",
    },
    GalleryItem {
        id: "g06",
        title: "Aura Blush",
        category: "gel",
        tags: &["aura", "airbrush", "gradient", "soft"],
        colors: &["pink", "purple"],
        trending: true,
        image: "/gallery/aura-blush.jpg",
    },
    GalleryItem {
        id: "g07",
        title: "Gold Foil Stiletto",
        category: "acrylic",
        tags: &["stiletto", "foil", "glam", "long"],
        colors: &["black", "gold"],
        trending: false,
        image: "/gallery/gold-stiletto.jpg",
    },
    GalleryItem {
        id: "g08",
        title: "Ocean Marble",
        category: "nail art",
        tags: &["marble", "summer", "beach", "swirl"],
        colors: &["blue", "white"],
        trending: true,
        image: "/gallery/ocean-marble.jpg",
    },
    GalleryItem {
        id: "g09",
        title: "Pedi Coral Crush",
        category: "pedicure",
        tags: &["summer", "bright", "toes"],
        colors: &["coral", "orange"],
        trending: false,
        image: "/gallery/coral-pedi.jpg",
    },
    GalleryItem {
        id: "g10",
        title: "Velvet Midnight",
        category: "gel",
        tags: &["velvet", "magnetic", "dark", "winter"],
        colors: &["navy", "black", "silver"],
        trending: false,
        image: "/gallery/velvet-midnight.jpg",
    },
];

pub fn find(id: &str) -> Option<&'static GalleryItem> {
    GALLERY.iter().find(|g| g.id == id)
}
