use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Empty when GOOGLE_API_KEY is absent; analysis requests are then
    /// rejected with a configuration error before any file processing.
    pub google_api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Soft wall-clock budget for one analysis (model call + parse).
    pub response_deadline_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            llm: LlmConfig {
                google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| crate::llm::google::models::DEFAULT.to_string()),
                temperature: env::var("LLM_TEMPERATURE")
                    .unwrap_or_else(|_| "0.2".to_string())
                    .parse()?,
                max_output_tokens: env::var("LLM_MAX_OUTPUT_TOKENS")
                    .unwrap_or_else(|_| "8192".to_string())
                    .parse()?,
            },
            analysis: AnalysisConfig {
                response_deadline_secs: env::var("RESPONSE_DEADLINE_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()?,
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| "26214400".to_string()) // 25 MiB
                    .parse()?,
            },
        })
    }
}
