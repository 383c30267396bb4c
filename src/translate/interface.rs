use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::TranslateError;

/// Source language sent with every request; the remote service detects it.
pub const AUTO_SOURCE: &str = "auto";

/// Payload format sent with every request.
pub const TEXT_FORMAT: &str = "text";

/// Body of the outbound translation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub q: String,
    pub source: String,
    pub target: String,
    pub format: String,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            q: text.into(),
            source: AUTO_SOURCE.to_string(),
            target: target.into(),
            format: TEXT_FORMAT.to_string(),
        }
    }
}

/// Translation service response.
///
/// Only `translatedText` is read by the widget. A missing or `null` value
/// decodes to an empty translation. `detectedLanguage` is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText", default, deserialize_with = "null_as_empty")]
    pub translated_text: String,
    #[serde(rename = "detectedLanguage", default, skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Translation backend trait
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Issue one translation request
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, TranslateError>;

    /// Endpoint this backend talks to, for diagnostics
    fn endpoint(&self) -> &str;
}
