use std::collections::BTreeSet;

use crate::errors::AppError;
use crate::models::gallery;
use crate::services::storage::{load_json, update_json, Storage};

fn key(client_id: &str) -> String {
    format!("favorites:{client_id}")
}

pub fn list(storage: &dyn Storage, client_id: &str) -> BTreeSet<String> {
    load_json(storage, &key(client_id))
}

/// Adds the item if absent, removes it if present. Returns whether it is now a favorite.
pub fn toggle(
    storage: &dyn Storage,
    client_id: &str,
    item_id: &str,
) -> Result<(bool, BTreeSet<String>), AppError> {
    if gallery::find(item_id).is_none() {
        return Err(AppError::NotFound(format!("gallery item {item_id}")));
    }

    let (now_favorite, favorites) =
        update_json(storage, &key(client_id), |favorites: &mut BTreeSet<String>| {
            let now_favorite = if favorites.remove(item_id) {
                false
            } else {
                favorites.insert(item_id.to_string());
                true
            };
            (now_favorite, favorites.clone())
        });

    tracing::debug!(client_id, item_id, now_favorite, "toggled favorite");

    Ok((now_favorite, favorites))
}
