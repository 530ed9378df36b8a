#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("AI provider is not configured (set a provider, model and API key)")]
    NotConfigured,
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("build LLM: {0}")]
    Build(String),
    #[error("chat: {0}")]
    Transport(String),
    #[error("LLM returned no text")]
    EmptyResponse,
    #[error("response is not JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("invalid response shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}
