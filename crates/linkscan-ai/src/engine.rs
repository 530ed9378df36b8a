use async_trait::async_trait;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::{ChatMessage, StructuredOutputFormat};
use serde_json::{json, Value};

use linkscan_core::AiSettings;

use crate::AiError;

/// Key an array-rooted schema is nested under for providers that only accept
/// object roots. `parse` unwraps it again.
pub const ARRAY_WRAPPER_KEY: &str = "items";

/// One prompt plus the JSON shape the model is asked to answer in.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Identifier for the output format, passed to providers that name schemas.
    pub schema_name: &'static str,
    pub prompt: String,
    pub response_schema: Value,
}

/// Transport seam between the requesters and a hosted model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one request and return the raw response text.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError>;
}

fn map_backend(provider: &str) -> Result<LLMBackend, AiError> {
    match provider {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(AiError::UnknownProvider(other.to_string())),
    }
}

/// `ModelClient` backed by the `llm` crate. A provider instance is built per
/// request because the response schema differs between requesters.
#[derive(Debug, Clone)]
pub struct LlmClient {
    settings: AiSettings,
}

impl LlmClient {
    pub fn new(settings: AiSettings) -> Result<Self, AiError> {
        if !linkscan_core::ai_configured(&settings) {
            return Err(AiError::NotConfigured);
        }
        map_backend(&settings.provider)?;
        Ok(Self { settings })
    }
}

/// Google and Ollama accept any schema root; the OpenAI-compatible and
/// Anthropic backends require an object.
fn needs_object_root(provider: &str) -> bool {
    !matches!(provider, "google" | "ollama")
}

fn output_format(provider: &str, request: &GenerateRequest) -> StructuredOutputFormat {
    let schema = &request.response_schema;
    let schema = if needs_object_root(provider) && schema["type"] != "object" {
        json!({
            "type": "object",
            "properties": { ARRAY_WRAPPER_KEY: schema },
            "required": [ARRAY_WRAPPER_KEY],
        })
    } else {
        schema.clone()
    };
    StructuredOutputFormat {
        name: request.schema_name.to_string(),
        description: None,
        schema: Some(schema),
        strict: None,
    }
}

#[async_trait]
impl ModelClient for LlmClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let settings = &self.settings;
        let backend = map_backend(&settings.provider)?;

        let mut builder = LLMBuilder::new()
            .backend(backend)
            .model(&settings.model)
            .schema(output_format(&settings.provider, request));

        if !settings.api_key.is_empty() {
            builder = builder.api_key(&settings.api_key);
        }

        let llm = builder.build().map_err(|e| AiError::Build(e.to_string()))?;

        let messages = vec![ChatMessage::user().content(&request.prompt).build()];

        tracing::info!(
            provider = %settings.provider,
            model = %settings.model,
            schema = request.schema_name,
            "sending request"
        );
        let response = llm
            .chat(&messages)
            .await
            .map_err(|e| AiError::Transport(e.to_string()))?;

        match response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AiError::EmptyResponse),
        }
    }
}
