use serde::Serialize;

use crate::errors::AppError;
use crate::models::gallery;

#[derive(Debug, Clone, Serialize)]
pub struct Fusion {
    pub name: String,
    pub base: &'static str,
    pub accent: &'static str,
    pub categories: Vec<&'static str>,
    pub palette: Vec<&'static str>,
    pub tags: Vec<&'static str>,
    pub description: String,
}

fn first_word(title: &str) -> &str {
    title.split_whitespace().next().unwrap_or(title)
}

fn last_word(title: &str) -> &str {
    title.split_whitespace().last().unwrap_or(title)
}

fn push_unique(into: &mut Vec<&'static str>, values: &[&'static str]) {
    for v in values {
        if !into.contains(v) {
            into.push(v);
        }
    }
}

/// Blends two gallery looks: the base's finish with the accent's details.
pub fn fuse(base_id: &str, accent_id: &str) -> Result<Fusion, AppError> {
    if base_id == accent_id {
        return Err(AppError::Validation("pick two different designs to fuse".to_string()));
    }
    let base = gallery::find(base_id)
        .ok_or_else(|| AppError::NotFound(format!("gallery item {base_id}")))?;
    let accent = gallery::find(accent_id)
        .ok_or_else(|| AppError::NotFound(format!("gallery item {accent_id}")))?;

    let mut categories = vec![base.category];
    push_unique(&mut categories, &[accent.category]);

    let mut palette = Vec::new();
    push_unique(&mut palette, base.colors);
    push_unique(&mut palette, accent.colors);

    let mut tags = Vec::new();
    push_unique(&mut tags, base.tags);
    push_unique(&mut tags, accent.tags);

    let name = format!("{} {}", first_word(base.title), last_word(accent.title));
    let description = format!(
        "{} as the base, finished with {} details in {}.",
        base.title,
        accent.title,
        palette.join(", ")
    );

    Ok(Fusion {
        name,
        base: base.id,
        accent: accent.id,
        categories,
        palette,
        tags,
        description,
    })
}
