use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

/// The body of an outbound message: either a plain string or an ordered
/// list of typed content items. The upstream accepts both shapes, so the
/// variant is resolved structurally rather than by a tag field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Items(Vec<ContentItem>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ContentItem {
    pub fn text<S: Into<String>>(text: S) -> Self {
        ContentItem::Text { text: text.into() }
    }

    /// Embed raw image bytes as an inline data URI item.
    pub fn image<S: AsRef<str>>(bytes: &[u8], mime_type: S) -> Self {
        ContentItem::ImageUrl {
            image_url: ImageUrl {
                url: data_uri(bytes, mime_type.as_ref()),
            },
        }
    }
}

/// Standard base64 (no wrapping, not URL-safe), matching what the upstream
/// decodes. An empty mime type falls back to application/octet-stream.
pub fn data_uri(bytes: &[u8], mime_type: &str) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime_type, BASE64.encode(bytes))
}
