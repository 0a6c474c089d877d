use serde::Serialize;

use crate::models::gallery::GALLERY;
use crate::models::GalleryItem;

const TRENDING_TERMS: &[&str] = &["trending", "trend", "popular", "tendencia"];

const TITLE_WEIGHT: u32 = 3;
const CATEGORY_WEIGHT: u32 = 2;
const TAG_WEIGHT: u32 = 2;
const COLOR_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub item: &'static GalleryItem,
    pub score: u32,
}

fn score(item: &GalleryItem, term: &str) -> u32 {
    let mut total = 0;
    if item.title.to_lowercase().contains(term) {
        total += TITLE_WEIGHT;
    }
    if item.category.contains(term) {
        total += CATEGORY_WEIGHT;
    }
    if item.tags.iter().any(|t| t.contains(term)) {
        total += TAG_WEIGHT;
    }
    if item.colors.iter().any(|c| c.contains(term)) {
        total += COLOR_WEIGHT;
    }
    total
}

/// Keyword search over the static gallery. A trending term narrows the results
/// to trending items; any other terms then rank within that set.
pub fn search(query: &str) -> Vec<SearchHit> {
    search_in(GALLERY, query)
}

pub fn search_in(items: &'static [GalleryItem], query: &str) -> Vec<SearchHit> {
    let query = query.to_lowercase();
    let mut trending_only = false;
    let mut terms = Vec::new();
    for term in query.split_whitespace() {
        if TRENDING_TERMS.contains(&term) {
            trending_only = true;
        } else {
            terms.push(term);
        }
    }

    let mut hits: Vec<SearchHit> = items
        .iter()
        .filter(|item| !trending_only || item.trending)
        .filter_map(|item| {
            if terms.is_empty() {
                return Some(SearchHit { item, score: 0 });
            }
            let total: u32 = terms.iter().map(|t| score(item, t)).sum();
            (total > 0).then_some(SearchHit { item, score: total })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.item.id.cmp(b.item.id)));
    hits
}
