//! The document-analysis endpoint.
//!
//! Pipeline: multipart upload -> text extraction -> keyword classification ->
//! prompt assembly -> Gemini call -> fence stripping + JSON parse -> relay.
//! Every failure is terminal for the request; no retries and no partial
//! results.

use std::time::Duration;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::{routing::post, Json, Router};
use bytes::Bytes;
use tokio::time::timeout;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::models::{AnalysisResult, AppState};
use crate::types::{AppError, AppResult, GenerateRequest};
use crate::{classify, extract, llm, postprocess, prompts};

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.analysis.max_upload_bytes;
    Router::new()
        .route("/analyze-single", post(analyze_single))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn analyze_single(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<AnalysisResult>> {
    // The credential check runs before any file processing so a misconfigured
    // deployment fails fast for every request.
    if state.config.llm.google_api_key.is_empty() {
        return Err(AppError::MissingApiKey);
    }

    let mut document: Option<(String, String, Bytes)> = None;
    let mut user_query = String::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("document") => {
                let filename = field.file_name().unwrap_or("documento").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?;
                document = Some((filename, content_type, data));
            }
            Some("query") => {
                user_query = field.text().await?;
            }
            _ => {}
        }
    }

    let (filename, content_type, data) = document.ok_or(AppError::MissingFile)?;

    let request_id = Uuid::new_v4();
    info!(%request_id, %filename, %content_type, size = data.len(), "processing uploaded document");

    let text = extract::extract_text(&data, &content_type)?;
    if text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    let doc_type = classify::classify(&text);
    info!(%request_id, doc_type = %doc_type, text_len = text.len(), "document classified");

    let query = match user_query.trim() {
        "" => None,
        _ => Some(user_query.as_str()),
    };
    let prompt = prompts::build_prompt(doc_type, &text, query);
    info!(%request_id, prompt_len = prompt.len(), "sending prompt to Gemini");

    // Soft deadline: the pipeline runs as its own task so an expired budget
    // only preempts the response; the in-flight Gemini call is not cancelled.
    let budget = Duration::from_secs(state.config.analysis.response_deadline_secs);
    let config = state.config.clone();
    let llm = state.llm.clone();
    let task = tokio::spawn(async move { run_analysis(&config, &llm, prompt).await });

    let result = match timeout(budget, task).await {
        Ok(joined) => {
            joined.map_err(|e| AppError::Internal(format!("analysis task failed: {e}")))??
        }
        Err(_) => {
            warn!(%request_id, budget_secs = budget.as_secs(), "analysis exceeded the response deadline");
            return Err(AppError::DeadlineExceeded);
        }
    };

    info!(%request_id, "analysis completed");
    Ok(Json(result))
}

async fn run_analysis(config: &Config, llm: &llm::Llm, prompt: String) -> AppResult<AnalysisResult> {
    let request = GenerateRequest {
        model: config.llm.model.clone(),
        prompt,
        temperature: Some(config.llm.temperature),
        max_output_tokens: Some(config.llm.max_output_tokens),
    };

    let response = llm.generate(&request).await?;
    postprocess::parse_analysis(&response.content)
}
