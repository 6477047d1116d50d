use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaggingError {
    #[error("no image file provided")]
    NoImageProvided,

    #[error("unsupported image format")]
    InvalidImageFormat,

    #[error("upstream LLM API returned status {status}")]
    UpstreamApi { status: u16 },

    #[error("failed to extract tags from model output")]
    TagExtractionFailed,

    #[error("internal error: {0}")]
    Internal(String),
}

pub type TaggingResult<T> = Result<T, TaggingError>;
