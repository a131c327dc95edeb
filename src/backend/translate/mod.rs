//! Translation Module
//!
//! Placeholder translation endpoint. The transform is deterministic and
//! local: the text is reversed and tagged with the language pair. A real
//! provider would replace [`pseudo_translate`] behind the same handler.

use axum::{body::Bytes, Json};

use crate::backend::error::{parse_json, BackendError};
use crate::shared::{TranslateRequest, TranslateResponse};

/// `[src->tgt] ` followed by `text` reversed by character
pub fn pseudo_translate(text: &str, source_language: &str, target_language: &str) -> String {
    let reversed: String = text.chars().rev().collect();
    format!("[{}->{}] {}", source_language, target_language, reversed)
}

/// Translate text (POST /api/translate)
pub async fn handle_translate(body: Bytes) -> Result<Json<TranslateResponse>, BackendError> {
    let request: TranslateRequest = parse_json(&body)?;
    tracing::debug!(
        "Translating {} chars {}->{}",
        request.text.chars().count(),
        request.source_language,
        request.target_language
    );

    Ok(Json(TranslateResponse {
        translated_text: pseudo_translate(
            &request.text,
            &request.source_language,
            &request.target_language,
        ),
    }))
}
