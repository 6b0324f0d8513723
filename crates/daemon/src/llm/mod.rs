use std::time::Duration;

use engine::{GenerationOutcome, PlanRequest};
use serde_json::json;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Get API key from environment
fn get_api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())
}

/// Seam over the remote generation call so the orchestrator can run against
/// scripted generators in tests.
#[async_trait::async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate(&self, request: &PlanRequest) -> GenerationOutcome;
}

pub struct GeminiGenerator {
    client: reqwest::Client,
    model: String,
}

impl GeminiGenerator {
    pub fn new() -> Self {
        GeminiGenerator {
            client: reqwest::Client::new(),
            model: GEMINI_MODEL.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl PlanGenerator for GeminiGenerator {
    /// Exactly one outbound call per invocation. No retry, no caching; an
    /// absent credential fails before the network is touched.
    async fn generate(&self, request: &PlanRequest) -> GenerationOutcome {
        let api_key = match get_api_key() {
            Some(key) => key,
            None => return GenerationOutcome::CredentialMissing,
        };

        let body = json!({
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.user_instruction }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema,
            }
        });

        let response = match self
            .client
            .post(&format!(
                "{}/models/{}:generateContent",
                GEMINI_API_BASE, self.model
            ))
            .header("x-goog-api-key", &api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return GenerationOutcome::TransportFailure(format!("request failed: {}", e))
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return GenerationOutcome::TransportFailure(format!(
                "generation API error: {} - {}",
                status, error_text
            ));
        }

        let result: serde_json::Value = match response.json().await {
            Ok(value) => value,
            Err(e) => {
                return GenerationOutcome::TransportFailure(format!(
                    "unreadable response body: {}",
                    e
                ))
            }
        };

        let text = result
            .get("candidates")
            .and_then(|v| v.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|v| v.as_array())
            .and_then(|parts| parts.first())
            .and_then(|p| p.get("text"))
            .and_then(|v| v.as_str())
            .unwrap_or("");

        if text.is_empty() {
            return GenerationOutcome::TransportFailure("empty response body".to_string());
        }

        GenerationOutcome::Success(text.to_string())
    }
}
