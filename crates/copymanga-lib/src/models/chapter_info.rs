use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scanlation group credited for a chapter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Scanlator {
    pub id: String,
    pub name: String,
}

/// A type represent chapter, normalized across source
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterInfo {
    pub id: String,
    pub title: String,
    pub number: f64,
    pub volume: Option<f64>,
    pub date: DateTime<Utc>,
    pub index: usize,
    pub scanlator: Option<Scanlator>,
    pub content_id: String,
    pub url: String,
}
