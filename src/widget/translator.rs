//! Translator widget state and its single side-effecting operation.
//!
//! The widget holds the source text, the selected target language and the
//! last applied translation. Failures never surface to the caller: they are
//! logged and leave the state as it was.

use std::sync::Arc;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::translate::{TranslateInterface, TranslateRequest};
use super::language::TargetLanguage;

/// What a call to [`TranslatorWidget::translate`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslateOutcome {
    /// Source text was empty; no request issued
    Skipped,
    /// Selected language is outside the supported set; no request issued
    Rejected,
    /// Response applied to the translated text
    Translated,
    /// Response arrived after a newer one had been applied and was dropped
    Stale,
    /// Request failed; state unchanged
    Failed,
}

/// Copy of the user-visible widget state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSnapshot {
    pub source_text: String,
    pub translated_text: String,
    pub selected_language: String,
}

/// Snapshot addressed by its session id, as sent to API and socket clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub uid: String,
    #[serde(flatten)]
    pub snapshot: WidgetSnapshot,
}

struct WidgetState {
    source_text: String,
    translated_text: String,
    selected_language: String,
    /// Sequence number of the last request issued
    issued_seq: u64,
    /// Sequence number of the last response written to `translated_text`
    applied_seq: u64,
}

pub struct TranslatorWidget {
    translator: Arc<dyn TranslateInterface>,
    state: RwLock<WidgetState>,
}

impl TranslatorWidget {
    pub fn new(translator: Arc<dyn TranslateInterface>) -> Self {
        Self {
            translator,
            state: RwLock::new(WidgetState {
                source_text: String::new(),
                translated_text: String::new(),
                selected_language: TargetLanguage::DEFAULT.code().to_string(),
                issued_seq: 0,
                applied_seq: 0,
            }),
        }
    }

    pub async fn update_source_text(&self, new_value: impl Into<String>) {
        self.state.write().await.source_text = new_value.into();
    }

    /// Store the selected code as given. Membership in the supported set is
    /// checked when translating.
    pub async fn select_language(&self, code: impl Into<String>) {
        self.state.write().await.selected_language = code.into();
    }

    pub async fn snapshot(&self) -> WidgetSnapshot {
        let state = self.state.read().await;
        WidgetSnapshot {
            source_text: state.source_text.clone(),
            translated_text: state.translated_text.clone(),
            selected_language: state.selected_language.clone(),
        }
    }

    pub async fn view(&self, uid: &str) -> WidgetView {
        WidgetView {
            uid: uid.to_string(),
            snapshot: self.snapshot().await,
        }
    }

    /// Translate the current source text into the selected language.
    ///
    /// The state lock is released while the request is in flight, so edits
    /// and further calls proceed concurrently. Responses are applied in
    /// issue order: one that lands after a newer response was applied is
    /// dropped.
    pub async fn translate(&self) -> TranslateOutcome {
        let prepared = {
            let mut state = self.state.write().await;
            prepare(&mut state)
        };
        match prepared {
            Ok((request, seq)) => self.issue(request, seq).await,
            Err(outcome) => outcome,
        }
    }

    /// Apply a whole form submission and translate it as one step, so a
    /// concurrent submission cannot swap in its own text or language
    /// before the request is built.
    pub async fn submit(&self, text: impl Into<String>, code: impl Into<String>) -> TranslateOutcome {
        let prepared = {
            let mut state = self.state.write().await;
            state.source_text = text.into();
            state.selected_language = code.into();
            prepare(&mut state)
        };
        match prepared {
            Ok((request, seq)) => self.issue(request, seq).await,
            Err(outcome) => outcome,
        }
    }

    async fn issue(&self, request: TranslateRequest, seq: u64) -> TranslateOutcome {
        debug!("Issuing translation #{} to {}", seq, self.translator.endpoint());

        match self.translator.translate(&request).await {
            Ok(response) => {
                let mut state = self.state.write().await;
                if seq < state.applied_seq {
                    info!(
                        "Dropping translation #{}, #{} already applied",
                        seq, state.applied_seq
                    );
                    return TranslateOutcome::Stale;
                }
                state.applied_seq = seq;
                state.translated_text = response.translated_text;
                TranslateOutcome::Translated
            }
            Err(e) => {
                error!("Translation Error: {}", e);
                TranslateOutcome::Failed
            }
        }
    }
}

/// Build the next request from the current state, or say why none is sent
fn prepare(state: &mut WidgetState) -> Result<(TranslateRequest, u64), TranslateOutcome> {
    if state.source_text.is_empty() {
        debug!("Source text is empty, skipping translation");
        return Err(TranslateOutcome::Skipped);
    }

    let target = match TargetLanguage::from_code(&state.selected_language) {
        Some(lang) => lang,
        None => {
            warn!("Unsupported target language: {:?}", state.selected_language);
            return Err(TranslateOutcome::Rejected);
        }
    };

    state.issued_seq += 1;
    Ok((
        TranslateRequest::new(state.source_text.clone(), target.code()),
        state.issued_seq,
    ))
}
