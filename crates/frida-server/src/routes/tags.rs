use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{error, info};

use crate::state::AppState;
use frida::errors::TaggingError;
use frida::intake::{self, UploadedImage};
use frida::models::tags::TagSet;

pub const NO_IMAGE_MSG: &str = "No image file provided.";
pub const INVALID_FORMAT_MSG: &str =
    "Invalid image format. Supported formats: JPEG, PNG, GIF, BMP.";
pub const EXTRACTION_FAILED_MSG: &str = "Failed to extract tags from LLM response.";
pub const UPSTREAM_FAILED_MSG: &str = "Failed to analyze image with LLM API.";
pub const INTERNAL_ERROR_MSG: &str =
    "An internal server error occurred while processing the image.";

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/ImageTagging/generate-tags", post(generate_tags))
        // oversized uploads are forwarded upstream as-is
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

async fn generate_tags(State(state): State<AppState>, multipart: Multipart) -> Response {
    match handle(state, multipart).await {
        Ok(tag_set) => (StatusCode::OK, Json(tag_set)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn handle(state: AppState, mut multipart: Multipart) -> Result<TagSet, TaggingError> {
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| TaggingError::Internal(format!("failed to read multipart body: {e}")))?
    {
        if field.name() == Some("image") {
            let content_type = field.content_type().map(String::from);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| TaggingError::Internal(format!("failed to read image field: {e}")))?;
            image = Some(UploadedImage::new(bytes.to_vec(), content_type));
            break;
        }
    }

    let image = intake::validate(image.as_ref())?;
    info!(size = image.len(), "received image for tagging");

    let content_type = image.content_type.as_deref().unwrap_or_default();
    state
        .provider
        .generate_tags(&image.bytes, content_type)
        .await
}

fn error_response(err: TaggingError) -> Response {
    match err {
        TaggingError::NoImageProvided => (StatusCode::BAD_REQUEST, NO_IMAGE_MSG).into_response(),
        TaggingError::InvalidImageFormat => {
            (StatusCode::BAD_REQUEST, INVALID_FORMAT_MSG).into_response()
        }
        TaggingError::TagExtractionFailed => {
            (StatusCode::BAD_REQUEST, EXTRACTION_FAILED_MSG).into_response()
        }
        TaggingError::UpstreamApi { status } => {
            // mirror the upstream status verbatim; the body stays generic
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, UPSTREAM_FAILED_MSG).into_response()
        }
        TaggingError::Internal(detail) => {
            error!("internal error while processing image: {detail}");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MSG).into_response()
        }
    }
}
