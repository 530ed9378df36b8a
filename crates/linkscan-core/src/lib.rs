pub mod criteria;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),
    #[error("settings I/O at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// --- Report types ---

/// Ordinal classification of assessed threat severity. Variants are
/// declared lowest to highest so `Ord` follows severity.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, schemars::JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Safe,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// HIGH and CRITICAL links should not be opened.
    pub fn is_elevated(self) -> bool {
        self >= RiskLevel::High
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownRiskLevel(s.to_string()))
    }
}

/// Structured verdict returned by the model for one link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub is_safe: bool,
    /// Risk level: SAFE, LOW, MEDIUM, HIGH, CRITICAL
    pub risk_level: RiskLevel,
    /// The probable destination if it's a shortlink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "String")]
    pub original_url: Option<String>,
    pub detected_threats: Vec<String>,
    pub recommendations: Vec<String>,
    pub explanation: String,
}

/// Outcome of scanning one piece of content (typed URL or decoded QR text).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<SecurityReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanResult {
    pub fn success(content: impl Into<String>, report: SecurityReport) -> Self {
        Self {
            content: content.into(),
            report: Some(report),
            error: None,
        }
    }

    pub fn failure(content: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            content: content.into(),
            report: None,
            error: Some(error.to_string()),
        }
    }
}

// --- AI Settings ---

pub const DEFAULT_PROVIDER: &str = "google";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AiSettings {
    /// Overlay values from the environment. `LINKSCAN_API_KEY` wins over the
    /// plain `API_KEY` fallback.
    pub fn with_env(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(key) = get("LINKSCAN_API_KEY").or_else(|| get("API_KEY")) {
            self.api_key = key;
        }
        if let Some(provider) = get("LINKSCAN_PROVIDER") {
            self.provider = provider;
        }
        if let Some(model) = get("LINKSCAN_MODEL") {
            self.model = model;
        }
        self
    }

    /// Key status for display. Never includes any key characters.
    pub fn masked_key(&self) -> &'static str {
        if self.api_key.is_empty() {
            "(not set)"
        } else {
            "set"
        }
    }
}

/// Resolve the global config directory (~/.linkscan/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".linkscan")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Missing or unreadable files fall back to defaults.
pub fn read_settings_from(path: &Path) -> AiSettings {
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings_to(path: &Path, settings: &AiSettings) -> Result<(), CoreError> {
    let io_err = |source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(io_err)
}

pub fn ai_configured(settings: &AiSettings) -> bool {
    !settings.provider.is_empty()
        && !settings.model.is_empty()
        && (settings.provider == "ollama" || !settings.api_key.is_empty())
}
