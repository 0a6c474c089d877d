use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How the camera preview ran for a session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PreviewMode {
    /// Polish painted onto tracked fingernails.
    #[default]
    HandTracking,
    /// Hand tracking failed to load; plain camera feed with a color swatch.
    CameraOnly,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TryOnSession {
    pub id: String,
    pub design_id: Option<String>,
    pub design_title: Option<String>,
    /// `#rrggbb`, lowercase.
    pub color: String,
    pub mode: PreviewMode,
    pub created_at: NaiveDateTime,
}
