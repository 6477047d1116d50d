use crate::errors::{TaggingError, TaggingResult};

/// Content types accepted for tagging. Matching is case-insensitive.
pub const SUPPORTED_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/bmp",
];

/// An uploaded image held only for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl UploadedImage {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Validate an upload before it enters the tagging pipeline.
///
/// This is a pure predicate over the upload's metadata: the byte stream is
/// never inspected, and the declared content type is trusted as supplied by
/// the caller (no magic-byte sniffing, by design).
pub fn validate(image: Option<&UploadedImage>) -> TaggingResult<&UploadedImage> {
    let image = match image {
        Some(image) if !image.is_empty() => image,
        _ => return Err(TaggingError::NoImageProvided),
    };

    let supported = image
        .content_type
        .as_deref()
        .map(|declared| {
            SUPPORTED_TYPES
                .iter()
                .any(|allowed| declared.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false);

    if !supported {
        return Err(TaggingError::InvalidImageFormat);
    }

    Ok(image)
}
