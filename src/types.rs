// Shared types and error handling

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// Request sent to a generative-language provider.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GenerateResponse {
    pub content: String,
    pub finish_reason: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Application errors. The `Display` strings are the client-facing messages
/// (in Spanish, matching what the frontend shows); diagnostic detail lives in
/// the variant payloads and only reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error de configuración del servidor: API Key no encontrada.")]
    MissingApiKey,

    #[error("No se subió archivo.")]
    MissingFile,

    #[error("Error procesando el archivo subido.")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Formato de archivo no soportado.")]
    UnsupportedFileType(String),

    #[error("Documento vacío.")]
    EmptyDocument,

    #[error("No se pudo extraer el texto del documento.")]
    Extraction(String),

    #[error("Error al comunicarse con la IA o procesar el documento.")]
    LlmApi(String),

    #[error("La IA devolvió una respuesta con formato inválido.")]
    MalformedResponse(String),

    #[error("El análisis superó el tiempo máximo de espera.")]
    DeadlineExceeded,

    #[error("Error interno del servidor.")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile
            | AppError::Multipart(_)
            | AppError::UnsupportedFileType(_)
            | AppError::EmptyDocument => StatusCode::BAD_REQUEST,
            AppError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
            AppError::MissingApiKey
            | AppError::Extraction(_)
            | AppError::LlmApi(_)
            | AppError::MalformedResponse(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
