use std::sync::Arc;
use tracing::info;

use crate::config::TranslateConfig;
use super::client::LibreTranslateClient;
use super::error::TranslateError;
use super::interface::TranslateInterface;

/// Factory for translation backends
pub struct TranslateFactory;

impl TranslateFactory {
    /// Create the translation backend named by `translate_config.provider`
    pub fn create_translator(
        translate_config: &TranslateConfig,
    ) -> Result<Arc<dyn TranslateInterface>, TranslateError> {
        info!(
            "Initializing translator: provider={}, endpoint={}",
            translate_config.provider, translate_config.endpoint
        );

        match translate_config.provider.as_str() {
            "libretranslate" => Ok(Arc::new(LibreTranslateClient::new(
                translate_config.endpoint.clone(),
            ))),
            other => Err(TranslateError::UnsupportedProvider(other.to_string())),
        }
    }
}
