use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use super::error::TranslateError;
use super::interface::{TranslateInterface, TranslateRequest, TranslateResponse};

/// Client for a LibreTranslate-compatible `/translate` endpoint
#[derive(Debug, Clone)]
pub struct LibreTranslateClient {
    client: Client,
    endpoint: String,
}

impl LibreTranslateClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl TranslateInterface for LibreTranslateClient {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, TranslateError> {
        debug!(
            "Sending translation request: target={}, chars={}",
            request.target,
            request.q.chars().count()
        );

        // reqwest's .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(TranslateError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(TranslateError::Transport)?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            error!("Translation service returned {}: {}", status, body);
            return Err(TranslateError::Status { status, body });
        }

        let result: TranslateResponse =
            serde_json::from_slice(&body).map_err(|e| TranslateError::Decode(e.to_string()))?;
        debug!("Translation received: chars={}", result.translated_text.chars().count());
        Ok(result)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
