use serde::{Deserialize, Serialize};

/// Inbound chat-completion envelope. Every level is optional: a missing or
/// null `choices`, `message`, or `content` is a normal failure path, not a
/// corrupt payload. The PascalCase aliases keep parsing working when the
/// upstream serializer does not use snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatResponse {
    #[serde(default, alias = "Id")]
    pub id: Option<String>,
    #[serde(default, alias = "Object")]
    pub object: Option<String>,
    #[serde(default, alias = "Created")]
    pub created: Option<i64>,
    #[serde(default, alias = "Model")]
    pub model: Option<String>,
    #[serde(default, alias = "Choices")]
    pub choices: Option<Vec<Choice>>,
    #[serde(default, alias = "Usage")]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Choice {
    #[serde(default, alias = "Index")]
    pub index: Option<i32>,
    #[serde(default, alias = "Message")]
    pub message: Option<ResponseMessage>,
    #[serde(default, alias = "FinishReason", alias = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResponseMessage {
    #[serde(default, alias = "Role")]
    pub role: Option<String>,
    #[serde(default, alias = "Content")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Usage {
    #[serde(default, alias = "PromptTokens", alias = "promptTokens")]
    pub prompt_tokens: Option<i32>,
    #[serde(default, alias = "CompletionTokens", alias = "completionTokens")]
    pub completion_tokens: Option<i32>,
    #[serde(default, alias = "TotalTokens", alias = "totalTokens")]
    pub total_tokens: Option<i32>,
    #[serde(default, alias = "CacheReadInputTokens")]
    pub cache_read_input_tokens: Option<i32>,
    #[serde(default, alias = "CacheWriteInputTokens")]
    pub cache_write_input_tokens: Option<i32>,
}

impl ChatResponse {
    /// Text content of the first choice, if present. Additional choices are
    /// ignored.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_deref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}
