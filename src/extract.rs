//! Text extraction from uploaded files.
//!
//! PDFs go through lopdf; plain text is decoded lossily so a stray invalid
//! byte never rejects an otherwise readable document. Anything else is an
//! unsupported format.

use lopdf::Document;
use tracing::debug;

use crate::types::{AppError, AppResult};

/// Extract text from raw upload bytes according to the declared content type.
/// Content-type parameters (e.g. `; charset=utf-8`) are ignored.
pub fn extract_text(bytes: &[u8], content_type: &str) -> AppResult<String> {
    let mime: mime::Mime = content_type
        .parse()
        .map_err(|_| AppError::UnsupportedFileType(content_type.to_string()))?;

    if mime.type_() == mime::APPLICATION && mime.subtype() == mime::PDF {
        extract_pdf(bytes)
    } else if mime.type_() == mime::TEXT && mime.subtype() == mime::PLAIN {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    } else {
        Err(AppError::UnsupportedFileType(mime.essence_str().to_string()))
    }
}

fn extract_pdf(bytes: &[u8]) -> AppResult<String> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("failed to load PDF: {e}")))?;

    let pages = doc.get_pages();
    debug!(page_count = pages.len(), "extracting text from PDF");

    let mut text = String::new();
    for (page_num, _object_id) in pages {
        let page_text = doc
            .extract_text(&[page_num])
            .map_err(|e| AppError::Extraction(format!("failed to extract page {page_num}: {e}")))?;
        text.push_str(&page_text);
        text.push('\n');
    }
    Ok(text)
}
