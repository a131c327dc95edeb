//! Translation request/response types.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Response of `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslateResponse {
    pub translated_text: String,
}
