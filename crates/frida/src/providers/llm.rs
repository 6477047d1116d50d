use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, warn};

use super::configs::LlmProviderConfig;
use crate::errors::{TaggingError, TaggingResult};
use crate::models::content::ContentItem;
use crate::models::request::{ChatMessage, ChatRequest};
use crate::models::response::ChatResponse;
use crate::models::tags::{parse_tags, TagSet};

/// Instruction sent alongside every image. Asks for comma-separated output
/// so the interpreter can split on a single delimiter.
pub const TAGGING_PROMPT: &str = "Analyze this image and generate descriptive tags for a stock media marketplace. \
Return between 15 and 40 tags as a single comma-separated list, with no additional text or explanation. \
Each tag must be lowercase, specific, and hyphenated when it spans multiple words (for example golden-hour, shallow-depth-of-field). \
Cover the following aspects: main subjects and objects; visual characteristics such as colors, lighting, and composition; \
context such as location, season, and activity; technical aspects such as camera angle, focus, and style; and overall mood or atmosphere.";

/// Client for the upstream vision-capable chat-completion API.
///
/// The reqwest client is built once and reused; authorization and accept
/// headers are set on each outgoing request builder rather than on shared
/// default headers, so concurrent calls never race on client state.
pub struct LlmProvider {
    client: Client,
    config: LlmProviderConfig,
}

impl LlmProvider {
    pub fn new(config: LlmProviderConfig) -> TaggingResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()
            .map_err(|e| TaggingError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// One user message whose content is [prompt text, image data URI].
    fn build_request(&self, image: &[u8], content_type: &str) -> ChatRequest {
        let items = vec![
            ContentItem::text(TAGGING_PROMPT),
            ContentItem::image(image, content_type),
        ];
        ChatRequest::new(self.config.model.clone(), vec![ChatMessage::user(items)])
    }

    async fn post(&self, payload: &ChatRequest) -> TaggingResult<ChatResponse> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );
        debug!(%url, "sending request to LLM API");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!("LLM API request failed to send: {e}");
                TaggingError::Internal(format!("LLM API request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            // The upstream body is logged for operators but never surfaced
            // to the caller.
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "LLM API returned an error");
            return Err(TaggingError::UpstreamApi {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("failed to read LLM API response body: {e}");
            TaggingError::Internal(format!("failed to read LLM API response: {e}"))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!("LLM API returned malformed JSON: {e}");
            TaggingError::Internal(format!("malformed LLM API response: {e}"))
        })
    }

    /// Run the full pipeline for one validated image: build the payload,
    /// make the single upstream call, and normalize the first choice's text
    /// into a tag list.
    pub async fn generate_tags(&self, image: &[u8], content_type: &str) -> TaggingResult<TagSet> {
        let payload = self.build_request(image, content_type);
        let response = self.post(&payload).await?;

        // Trim before the emptiness check so whitespace-only content is an
        // extraction failure, not an empty tag list.
        let content = response.first_content().map(str::trim).unwrap_or_default();
        if content.is_empty() {
            warn!("LLM API returned empty or invalid response");
            return Err(TaggingError::TagExtractionFailed);
        }

        let tags = parse_tags(content);
        if tags.is_empty() {
            warn!("no tags remained after normalizing model output");
            return Err(TaggingError::TagExtractionFailed);
        }

        debug!(count = tags.len(), "generated tags for image");
        Ok(TagSet::new(tags, image.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup_mock_server(response: ResponseTemplate) -> (MockServer, LlmProvider) {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test_api_key"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let config = LlmProviderConfig {
            host: mock_server.uri(),
            api_key: "test_api_key".to_string(),
            model: "gpt-5".to_string(),
        };

        let provider = LlmProvider::new(config).unwrap();
        (mock_server, provider)
    }

    fn completion_body(content: Value) -> Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 120, "completion_tokens": 18, "total_tokens": 138}
        })
    }

    #[tokio::test]
    async fn test_generate_tags_basic() {
        let body = completion_body(json!("nature, landscape, mountains, sky"));
        let (_server, provider) =
            setup_mock_server(ResponseTemplate::new(200).set_body_json(body)).await;

        let tag_set = provider
            .generate_tags(b"fake image content", "image/jpeg")
            .await
            .unwrap();

        assert_eq!(tag_set.tags, vec!["nature", "landscape", "mountains", "sky"]);
        assert_eq!(tag_set.image_size, b"fake image content".len() as u64);
    }

    #[tokio::test]
    async fn test_request_payload_shape() {
        let body = completion_body(json!("nature"));
        let (server, provider) =
            setup_mock_server(ResponseTemplate::new(200).set_body_json(body)).await;

        provider.generate_tags(b"xyz", "image/png").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();

        assert_eq!(sent["model"], json!("gpt-5"));
        let messages = sent["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], json!("user"));

        let items = messages[0]["content"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["type"], json!("text"));
        assert_eq!(items[0]["text"], json!(TAGGING_PROMPT));
        assert_eq!(items[1]["type"], json!("image_url"));
        assert_eq!(
            items[1]["image_url"]["url"],
            json!("data:image/png;base64,eHl6")
        );

        // unset optionals must not appear at all
        for field in ["temperature", "max_tokens", "top_p", "stream", "tools"] {
            assert!(sent.get(field).is_none(), "unexpected field {field}");
        }
    }

    #[tokio::test]
    async fn test_upstream_status_is_passed_through() {
        for status in [400u16, 401, 403, 500, 503] {
            let (_server, provider) = setup_mock_server(
                ResponseTemplate::new(status).set_body_string("upstream diagnostic detail"),
            )
            .await;

            let err = provider
                .generate_tags(b"fake image content", "image/jpeg")
                .await
                .unwrap_err();
            assert_eq!(err, TaggingError::UpstreamApi { status });
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_internal_error() {
        let (_server, provider) =
            setup_mock_server(ResponseTemplate::new(200).set_body_string("{ invalid json")).await;

        let err = provider
            .generate_tags(b"fake image content", "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, TaggingError::Internal(_)));
    }

    #[tokio::test]
    async fn test_missing_choices_fails_extraction() {
        for body in [
            json!({"id": "chatcmpl-123", "choices": null}),
            json!({"choices": []}),
            json!({"choices": [{"message": null}]}),
            json!({"choices": [{"message": {"content": null}}]}),
            completion_body(json!("")),
        ] {
            let (_server, provider) =
                setup_mock_server(ResponseTemplate::new(200).set_body_json(body.clone())).await;

            let err = provider
                .generate_tags(b"fake image content", "image/jpeg")
                .await
                .unwrap_err();
            assert_eq!(err, TaggingError::TagExtractionFailed, "body: {body}");
        }
    }

    #[tokio::test]
    async fn test_whitespace_only_content_fails_extraction() {
        let body = completion_body(json!("   \t\n   "));
        let (_server, provider) =
            setup_mock_server(ResponseTemplate::new(200).set_body_json(body)).await;

        let err = provider
            .generate_tags(b"fake image content", "image/jpeg")
            .await
            .unwrap_err();
        assert_eq!(err, TaggingError::TagExtractionFailed);
    }

    #[tokio::test]
    async fn test_comma_noise_is_absorbed() {
        let body = completion_body(json!("nature,,landscape,   ,mountains,sky,"));
        let (_server, provider) =
            setup_mock_server(ResponseTemplate::new(200).set_body_json(body)).await;

        let tag_set = provider
            .generate_tags(b"fake image content", "image/jpeg")
            .await
            .unwrap();
        assert_eq!(tag_set.tags, vec!["nature", "landscape", "mountains", "sky"]);
    }

    #[tokio::test]
    async fn test_pascal_case_response_is_parsed() {
        let body = json!({
            "Choices": [{
                "Message": {"Content": "nature, landscape"},
                "FinishReason": "stop"
            }]
        });
        let (_server, provider) =
            setup_mock_server(ResponseTemplate::new(200).set_body_json(body)).await;

        let tag_set = provider
            .generate_tags(b"fake image content", "image/jpeg")
            .await
            .unwrap();
        assert_eq!(tag_set.tags, vec!["nature", "landscape"]);
    }
}
