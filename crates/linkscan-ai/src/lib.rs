pub mod engine;
mod error;
mod parse;
mod prompt;
pub mod schema;

use linkscan_core::{AiSettings, SecurityReport};

pub use engine::{GenerateRequest, LlmClient, ModelClient};
pub use error::AiError;

/// Report and tips requesters over one model client. Holds no other state:
/// every call is a fresh request.
pub struct Advisor<C> {
    client: C,
}

impl Advisor<LlmClient> {
    pub fn from_settings(settings: &AiSettings) -> Result<Self, AiError> {
        Ok(Self::new(LlmClient::new(settings.clone())?))
    }
}

impl<C: ModelClient> Advisor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Ask the model for a security report on `url`. The URL is not validated
    /// locally.
    pub async fn analyze_link(&self, url: &str) -> Result<SecurityReport, AiError> {
        let request = GenerateRequest {
            schema_name: prompt::REPORT_SCHEMA_NAME,
            prompt: prompt::report_prompt(url),
            response_schema: schema::response_schema::<SecurityReport>(),
        };
        let raw = self.client.generate(&request).await?;
        tracing::debug!(%url, "raw report output:\n{raw}");
        let report = parse::parse_report(&raw)?;
        tracing::info!(%url, risk = %report.risk_level, "link analyzed");
        Ok(report)
    }

    pub async fn festive_tips(&self) -> Result<Vec<String>, AiError> {
        let request = GenerateRequest {
            schema_name: prompt::TIPS_SCHEMA_NAME,
            prompt: prompt::tips_prompt(),
            response_schema: schema::response_schema::<Vec<String>>(),
        };
        let raw = self.client.generate(&request).await?;
        tracing::debug!("raw tips output:\n{raw}");
        let tips = parse::parse_tips(&raw)?;
        tracing::info!(count = tips.len(), "tips received");
        Ok(tips)
    }

    /// Tips for display. Returns empty vec on failure.
    pub async fn get_tips(&self) -> Vec<String> {
        match self.festive_tips().await {
            Ok(tips) => tips,
            Err(e) => {
                tracing::warn!("failed to fetch tips: {e}");
                vec![]
            }
        }
    }
}

/// Run link analysis via the configured provider.
pub async fn analyze_link(settings: &AiSettings, url: &str) -> Result<SecurityReport, AiError> {
    Advisor::from_settings(settings)?.analyze_link(url).await
}

pub async fn festive_tips(settings: &AiSettings) -> Result<Vec<String>, AiError> {
    Advisor::from_settings(settings)?.festive_tips().await
}

/// Seasonal tips via the configured provider. Returns empty vec on failure.
pub async fn get_tips(settings: &AiSettings) -> Vec<String> {
    match Advisor::from_settings(settings) {
        Ok(advisor) => advisor.get_tips().await,
        Err(e) => {
            tracing::warn!("failed to fetch tips: {e}");
            vec![]
        }
    }
}
