use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("translation service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed translation response: {0}")]
    Decode(String),

    #[error("unsupported translation provider: {0}")]
    UnsupportedProvider(String),
}
