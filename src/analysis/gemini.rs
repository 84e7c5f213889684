use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::NutritionAdvisor;
use crate::models::HealthAnalysis;

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for nutrition ratings.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
enum AnalysisError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Client for the Gemini `generateContent` API.
///
/// A missing API key is a normal condition: `analyze` then answers with
/// the fixed "unconfigured" rating and skips the network entirely.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, base_url: &str, model: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// Reads `GEMINI_API_KEY` (may be absent) and optional overrides
    /// `GEMINI_BASE_URL` / `GEMINI_MODEL`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok();
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        Self::new(api_key, &base_url, &model)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn request_analysis(
        &self,
        api_key: &str,
        menu_name: &str,
    ) -> Result<Option<HealthAnalysis>, AnalysisError> {
        let request = GenerateContentRequest::for_dish(menu_name);

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::RequestFailed(format!("{status}: {body}")));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::InvalidResponse(e.to_string()))?;

        match api_response.first_text() {
            Some(text) => parse_analysis_text(&text).map(Some),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl NutritionAdvisor for GeminiClient {
    async fn analyze(&self, menu_name: &str) -> Option<HealthAnalysis> {
        let Some(api_key) = self.api_key.clone() else {
            tracing::warn!("GEMINI_API_KEY not set; returning unconfigured rating");
            return Some(HealthAnalysis::unconfigured());
        };

        match self.request_analysis(&api_key, menu_name).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(dish = menu_name, error = %e, "health analysis failed");
                Some(HealthAnalysis::unavailable())
            }
        }
    }
}

fn build_prompt(menu_name: &str) -> String {
    format!(
        "Analyze the Thai dish \"{menu_name}\". Provide a Nutri-Score \
         (A, B, C, D, or E based on general healthiness) and a short \
         health tip (max 15 words) in Thai language."
    )
}

/// Parse the model's JSON text into the two-field analysis shape.
fn parse_analysis_text(text: &str) -> Result<HealthAnalysis, AnalysisError> {
    serde_json::from_str(text.trim()).map_err(|e| AnalysisError::InvalidResponse(e.to_string()))
}

// ── Wire types ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn for_dish(menu_name: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(menu_name),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

/// Schema constraining the reply to exactly the two analysis fields.
fn analysis_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "nutriScore": {
                "type": "STRING",
                "description": "The Nutri-Score letter (A-E)"
            },
            "healthTip": {
                "type": "STRING",
                "description": "A short health tip in Thai, max 15 words"
            }
        },
        "required": ["nutriScore", "healthTip"]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate part, if the service said anything.
    fn first_text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}
