#[derive(Debug, Clone)]
pub struct LlmProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
}
