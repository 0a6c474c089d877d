//! History of AR color previews, newest first, kept per client.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{gallery, PreviewMode, TryOnSession};
use crate::services::clock::Clock;
use crate::services::storage::{load_json, update_json, Storage};

pub const HISTORY_LIMIT: usize = 20;

/// Named polish shades used by the gallery.
const PALETTE: &[(&str, &str)] = &[
    ("black", "#111111"),
    ("blue", "#2f5fd0"),
    ("burgundy", "#6d1a36"),
    ("coral", "#ff6f61"),
    ("gold", "#d4af37"),
    ("green", "#3a9d5d"),
    ("navy", "#1b2a4a"),
    ("nude", "#e3bc9a"),
    ("orange", "#ff8c2a"),
    ("pearl", "#f4efe6"),
    ("pink", "#f7a1c4"),
    ("purple", "#7b4fa0"),
    ("red", "#c8102e"),
    ("silver", "#c0c0c0"),
    ("white", "#fafafa"),
    ("yellow", "#f6d743"),
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TryOnRequest {
    pub design_id: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub mode: PreviewMode,
}

fn key(client_id: &str) -> String {
    format!("try-on:{client_id}")
}

/// A palette name or `#rrggbb` (the `#` is optional), as lowercase `#rrggbb`.
pub fn normalize_color(raw: &str) -> Result<String, AppError> {
    let color = raw.trim().to_lowercase();
    if let Some((_, hex)) = PALETTE.iter().find(|(name, _)| *name == color) {
        return Ok(hex.to_string());
    }
    let digits = color.strip_prefix('#').unwrap_or(&color);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Ok(format!("#{digits}"));
    }
    Err(AppError::Validation(format!("unrecognized polish color: {raw:?}")))
}

pub fn history(storage: &dyn Storage, client_id: &str) -> Vec<TryOnSession> {
    load_json(storage, &key(client_id))
}

/// Without an explicit color the design's first shade is previewed.
pub fn record(
    storage: &dyn Storage,
    clock: &dyn Clock,
    client_id: &str,
    req: TryOnRequest,
) -> Result<TryOnSession, AppError> {
    let design = match req.design_id.as_deref() {
        Some(id) => Some(
            gallery::find(id).ok_or_else(|| AppError::NotFound(format!("gallery item {id}")))?,
        ),
        None => None,
    };

    let color = match (req.color.as_deref(), design) {
        (Some(color), _) => normalize_color(color)?,
        (None, Some(item)) => {
            let shade = item.colors.first().ok_or_else(|| {
                AppError::Validation(format!("design {} has no preview color", item.id))
            })?;
            normalize_color(shade)?
        }
        (None, None) => {
            return Err(AppError::Validation(
                "choose a design or a color to preview".to_string(),
            ))
        }
    };

    let session = TryOnSession {
        id: uuid::Uuid::new_v4().to_string(),
        design_id: design.map(|d| d.id.to_string()),
        design_title: design.map(|d| d.title.to_string()),
        color,
        mode: req.mode,
        created_at: clock.now(),
    };

    update_json(storage, &key(client_id), |sessions: &mut Vec<TryOnSession>| {
        sessions.insert(0, session.clone());
        sessions.truncate(HISTORY_LIMIT);
    });

    tracing::info!(
        client_id,
        design = ?session.design_id,
        color = %session.color,
        mode = ?session.mode,
        "try-on session recorded"
    );
    Ok(session)
}

/// Returns how many sessions were dropped.
pub fn clear(storage: &dyn Storage, client_id: &str) -> usize {
    update_json(storage, &key(client_id), |sessions: &mut Vec<TryOnSession>| {
        let cleared = sessions.len();
        sessions.clear();
        cleared
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use crate::services::storage::tests::{BrokenStorage, SlowStorage};
    use crate::services::storage::MemoryStorage;
    use chrono::{Duration, NaiveDateTime};

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDateTime::parse_from_str("2025-06-16 10:00", "%Y-%m-%d %H:%M").unwrap(),
        )
    }

    fn color(c: &str) -> TryOnRequest {
        TryOnRequest {
            color: Some(c.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("Red").unwrap(), "#c8102e");
        assert_eq!(normalize_color("#FFAA00").unwrap(), "#ffaa00");
        assert_eq!(normalize_color(" ffaa00 ").unwrap(), "#ffaa00");
        assert!(normalize_color("#fff").is_err());
        assert!(normalize_color("#gggggg").is_err());
        assert!(normalize_color("chartreuse").is_err());
    }

    #[test]
    fn test_every_gallery_shade_is_in_palette() {
        for item in gallery::GALLERY {
            for shade in item.colors {
                assert!(normalize_color(shade).is_ok(), "{} {shade}", item.id);
            }
        }
    }

    #[test]
    fn test_design_without_color_uses_first_shade() {
        let storage = MemoryStorage::new();
        let req = TryOnRequest {
            design_id: Some("g03".to_string()),
            ..Default::default()
        };
        let session = record(&storage, &clock(), "ana", req).unwrap();
        assert_eq!(session.design_title.as_deref(), Some("Cherry Cola Cat Eye"));
        assert_eq!(session.color, "#c8102e");
        assert_eq!(session.mode, PreviewMode::HandTracking);
    }

    #[test]
    fn test_history_newest_first_and_capped() {
        let storage = MemoryStorage::new();
        let clock = clock();
        for i in 0..(HISTORY_LIMIT + 3) {
            record(&storage, &clock, "ana", color(&format!("#0000{i:02x}"))).unwrap();
            clock.advance(Duration::minutes(1));
        }
        let sessions = history(&storage, "ana");
        assert_eq!(sessions.len(), HISTORY_LIMIT);
        assert_eq!(sessions[0].color, format!("#0000{:02x}", HISTORY_LIMIT + 2));
        assert!(sessions.windows(2).all(|w| w[0].created_at > w[1].created_at));
        assert!(history(&storage, "bea").is_empty());
    }

    #[test]
    fn test_rejections_leave_history_alone() {
        let storage = MemoryStorage::new();
        let unknown = TryOnRequest {
            design_id: Some("g99".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            record(&storage, &clock(), "ana", unknown),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            record(&storage, &clock(), "ana", TryOnRequest::default()),
            Err(AppError::Validation(_))
        ));
        assert!(record(&storage, &clock(), "ana", color("sparkly")).is_err());
        assert!(history(&storage, "ana").is_empty());
    }

    #[test]
    fn test_clear() {
        let storage = MemoryStorage::new();
        record(&storage, &clock(), "ana", color("pink")).unwrap();
        record(&storage, &clock(), "ana", color("gold")).unwrap();
        assert_eq!(clear(&storage, "ana"), 2);
        assert!(history(&storage, "ana").is_empty());
        assert_eq!(clear(&storage, "ana"), 0);
    }

    #[test]
    fn test_concurrent_sessions_are_all_kept() {
        let storage = SlowStorage::new(std::time::Duration::from_millis(10));
        let clock = clock();
        std::thread::scope(|scope| {
            for shade in ["red", "blue", "gold", "pink"] {
                let (storage, clock) = (&storage, &clock);
                scope.spawn(move || record(storage, clock, "ana", color(shade)).unwrap());
            }
        });
        assert_eq!(history(&storage, "ana").len(), 4);
    }

    #[test]
    fn test_broken_storage_still_returns_session() {
        let session = record(&BrokenStorage, &clock(), "ana", color("red")).unwrap();
        assert_eq!(session.color, "#c8102e");
        assert!(history(&BrokenStorage, "ana").is_empty());
    }
}
