use async_trait::async_trait;

use crate::types::{AppResult, GenerateRequest, GenerateResponse};

#[async_trait]
pub trait LlmAdapter: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse>;
}

/// Thin wrapper over the configured adapter, constructed once at startup and
/// shared through `AppState`. Gemini is the only provider the service talks
/// to today; handler tests inject fakes through [`Llm::with_adapter`].
pub struct Llm {
    adapter: Box<dyn LlmAdapter>,
}

impl Llm {
    pub fn google(api_key: &str) -> Self {
        Self {
            adapter: Box::new(crate::llm::google::GoogleAdapter::new(api_key)),
        }
    }

    pub fn with_adapter(adapter: Box<dyn LlmAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        self.adapter.generate(request).await
    }
}
