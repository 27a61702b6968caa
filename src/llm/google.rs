// Google Gemini adapter
// API Reference: https://ai.google.dev/api/generate-content
//
// Uses the v1beta generateContent endpoint with the API key passed as a query
// parameter. The base URL is injectable so tests can point the adapter at a
// local mock server.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::provider::LlmAdapter;
use crate::types::{AppError, AppResult, GenerateRequest, GenerateResponse, TokenUsage};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleAdapter {
    client: Client,
    api_key: String,
    base_url: String,
}

// Request types for the Gemini API

#[derive(Serialize)]
struct GeminiGenerateRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

// Response types for the Gemini API

#[derive(Deserialize)]
struct GeminiGenerateResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata", default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiResponseContent>,
    #[serde(rename = "finishReason", default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct GeminiUsageMetadata {
    prompt_token_count: u32,
    candidates_token_count: u32,
    total_token_count: u32,
}

#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    code: Option<i32>,
}

impl GoogleAdapter {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE)
    }

    /// Adapter pointed at an alternative endpoint (used by tests).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LlmAdapter for GoogleAdapter {
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, request.model, self.api_key
        );

        let gemini_request = GeminiGenerateRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            }),
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| AppError::LlmApi(format!("Gemini request failed: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as a structured Gemini error response
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_text) {
                return Err(AppError::LlmApi(format!(
                    "Gemini API error ({}): {} (status: {:?}, code: {:?})",
                    status,
                    error_response.error.message,
                    error_response.error.status,
                    error_response.error.code
                )));
            }

            return Err(AppError::LlmApi(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiGenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::LlmApi(format!("failed to parse Gemini response: {e}")))?;

        let usage = gemini_response
            .usage_metadata
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        let candidate = gemini_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::LlmApi("Gemini returned no candidates".to_string()))?;

        let content = candidate
            .content
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(GenerateResponse {
            content,
            finish_reason: candidate.finish_reason.unwrap_or_else(|| "STOP".to_string()),
            usage,
        })
    }
}

/// Gemini model identifiers accepted by the generateContent endpoint.
pub mod models {
    pub const GEMINI_1_5_FLASH: &str = "gemini-1.5-flash";
    pub const GEMINI_1_5_PRO: &str = "gemini-1.5-pro";
    pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";

    /// Default production model: fast and cheap enough for per-upload calls.
    pub const DEFAULT: &str = GEMINI_1_5_FLASH;
}
