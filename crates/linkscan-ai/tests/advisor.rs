use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use linkscan_ai::{Advisor, AiError, GenerateRequest, ModelClient};
use linkscan_core::{AiSettings, RiskLevel, SecurityReport};

/// Replies with a canned body and records every request it sees.
struct MockClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
    seen: Mutex<Vec<GenerateRequest>>,
}

impl MockClient {
    fn replying(body: impl Into<String>) -> Self {
        Self {
            reply: Ok(body.into()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            ..Self::replying("")
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> GenerateRequest {
        self.seen.lock().unwrap().last().cloned().expect("no request sent")
    }
}

#[async_trait]
impl ModelClient for MockClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(AiError::Transport)
    }
}

fn scam_payload() -> Value {
    json!({
        "isSafe": false,
        "riskLevel": "HIGH",
        "originalUrl": "http://scam.example",
        "detectedThreats": ["shortened URL"],
        "recommendations": ["do not click"],
        "explanation": "..."
    })
}

#[tokio::test]
async fn shortlink_scenario_matches_model_payload() {
    let payload = scam_payload();
    let advisor = Advisor::new(MockClient::replying(payload.to_string()));

    let report = advisor
        .analyze_link("http://bit.ly/new-year-prizes-2025")
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&report).unwrap(), payload);
    assert_eq!(report.risk_level, RiskLevel::High);
    assert_eq!(report.original_url.as_deref(), Some("http://scam.example"));
}

#[tokio::test]
async fn report_round_trips_field_for_field() {
    let expected = SecurityReport {
        is_safe: true,
        risk_level: RiskLevel::Low,
        original_url: None,
        detected_threats: vec![],
        recommendations: vec!["Check the padlock".to_string(), "Type the address".to_string()],
        explanation: "Uncommon TLD, otherwise clean — ünïcode kept".to_string(),
    };
    let body = serde_json::to_string_pretty(&expected).unwrap();
    let advisor = Advisor::new(MockClient::replying(body));

    let report = advisor.analyze_link("https://example.shop").await.unwrap();
    assert_eq!(report, expected);
}

#[tokio::test]
async fn every_level_is_accepted() {
    for level in RiskLevel::ALL {
        let mut payload = scam_payload();
        payload["riskLevel"] = json!(level.label());
        let advisor = Advisor::new(MockClient::replying(payload.to_string()));
        let report = advisor.analyze_link("http://x.test").await.unwrap();
        assert_eq!(report.risk_level, level);
    }
}

#[tokio::test]
async fn non_json_reply_fails_instead_of_defaulting() {
    let advisor = Advisor::new(MockClient::replying("Sorry, I can't help with that."));
    let err = advisor.analyze_link("http://x.test").await.unwrap_err();
    assert!(matches!(err, AiError::MalformedResponse(_)), "{err}");
}

#[tokio::test]
async fn out_of_range_level_is_rejected() {
    let mut payload = scam_payload();
    payload["riskLevel"] = json!("EXTREME");
    let advisor = Advisor::new(MockClient::replying(payload.to_string()));
    let err = advisor.analyze_link("http://x.test").await.unwrap_err();
    assert!(matches!(err, AiError::InvalidShape(_)), "{err}");
}

#[tokio::test]
async fn transport_failure_propagates() {
    let advisor = Advisor::new(MockClient::failing("connection reset"));
    let err = advisor.analyze_link("http://x.test").await.unwrap_err();
    assert_eq!(err.to_string(), "chat: connection reset");
}

#[tokio::test]
async fn repeated_scans_are_not_cached() {
    let advisor = Advisor::new(MockClient::replying(scam_payload().to_string()));
    let url = "http://bit.ly/new-year-prizes-2025";

    advisor.analyze_link(url).await.unwrap();
    advisor.analyze_link(url).await.unwrap();

    assert_eq!(advisor.client().calls(), 2);
}

#[tokio::test]
async fn report_request_carries_url_and_schema() {
    let advisor = Advisor::new(MockClient::replying(scam_payload().to_string()));
    advisor.analyze_link("http://paypa1.example/login").await.unwrap();

    let request = advisor.client().last_request();
    assert_eq!(request.schema_name, "security_report");
    assert!(request.prompt.contains("URL: http://paypa1.example/login"));
    assert_eq!(request.response_schema["type"], "object");
    assert!(request.response_schema["properties"]["explanation"].is_object());
}

#[tokio::test]
async fn tips_are_returned_unmodified() {
    let advisor = Advisor::new(MockClient::replying(r#"["a","b","c","d","e"]"#));
    let tips = advisor.festive_tips().await.unwrap();
    assert_eq!(tips, ["a", "b", "c", "d", "e"]);

    let request = advisor.client().last_request();
    assert_eq!(request.schema_name, "security_tips");
    assert_eq!(request.response_schema["type"], "array");
}

#[tokio::test]
async fn object_wrapped_tips_are_accepted() {
    let advisor = Advisor::new(MockClient::replying(r#"{"items":["a","b"]}"#));
    assert_eq!(advisor.festive_tips().await.unwrap(), ["a", "b"]);
}

#[tokio::test]
async fn tip_count_is_not_enforced() {
    let advisor = Advisor::new(MockClient::replying(r#"["only","three","tips"]"#));
    assert_eq!(advisor.festive_tips().await.unwrap().len(), 3);
}

#[tokio::test]
async fn tips_fall_back_to_empty_list() {
    let advisor = Advisor::new(MockClient::replying("not json"));
    assert!(advisor.festive_tips().await.is_err());
    assert!(advisor.get_tips().await.is_empty());

    let offline = Advisor::new(MockClient::failing("dns"));
    assert!(offline.get_tips().await.is_empty());
}

#[tokio::test]
async fn unconfigured_settings_fail_before_any_request() {
    let settings = AiSettings::default();
    let err = linkscan_ai::analyze_link(&settings, "http://x.test")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::NotConfigured));
    assert!(linkscan_ai::get_tips(&settings).await.is_empty());
}
