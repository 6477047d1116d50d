use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final output of a successful tagging request. Built once, serialized to
/// the caller, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSet {
    pub tags: Vec<String>,
    pub image_size: u64,
    pub processed_at: DateTime<Utc>,
}

impl TagSet {
    pub fn new(tags: Vec<String>, image_size: u64) -> Self {
        Self {
            tags,
            image_size,
            processed_at: Utc::now(),
        }
    }
}

/// Normalize the model's free-text output into a tag list: split on commas,
/// trim each segment, and drop segments that trim to nothing. Trailing
/// commas, doubled commas, and whitespace-only tokens are absorbed silently.
pub fn parse_tags(content: &str) -> Vec<String> {
    content
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
