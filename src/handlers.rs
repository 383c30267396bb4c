use std::sync::Arc;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::widget::{TranslateOutcome, TranslatorWidget, WidgetView};

/// Messages pushed to socket clients
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    WidgetState(WidgetView),
    TranslateOutcome { outcome: TranslateOutcome },
}

pub type Outbound = UnboundedSender<ServerMessage>;

/// Dispatch one client message to the widget bound to this connection
pub async fn handle_message(
    widget_uid: &str,
    widget: &Arc<TranslatorWidget>,
    text: &str,
    outbound: &Outbound,
) -> anyhow::Result<()> {
    let msg: Value = serde_json::from_str(text)?;
    let msg_type = msg.get("type").and_then(|v| v.as_str());

    match msg_type {
        Some("update-source-text") => {
            let text = msg.get("text").and_then(|v| v.as_str()).unwrap_or("");
            widget.update_source_text(text).await;
            send_state(widget_uid, widget, outbound).await;
        }
        Some("select-language") => {
            let code = msg.get("code").and_then(|v| v.as_str()).unwrap_or("");
            widget.select_language(code).await;
            send_state(widget_uid, widget, outbound).await;
        }
        Some("translate") => {
            handle_translate(widget_uid, widget, outbound);
        }
        Some("fetch-state") => {
            send_state(widget_uid, widget, outbound).await;
        }
        _ => {
            // Translated text has no setter; writes to it land here too
            warn!("Unknown message type: {:?}", msg_type);
        }
    }

    Ok(())
}

/// Run the translation on its own task so edits keep flowing while the
/// request is outstanding.
fn handle_translate(widget_uid: &str, widget: &Arc<TranslatorWidget>, outbound: &Outbound) {
    let widget_uid = widget_uid.to_string();
    let widget = widget.clone();
    let outbound = outbound.clone();

    tokio::spawn(async move {
        let outcome = widget.translate().await;
        debug!("Widget {} translate: {:?}", widget_uid, outcome);
        let _ = outbound.send(ServerMessage::TranslateOutcome { outcome });
        send_state(&widget_uid, &widget, &outbound).await;
    });
}

pub async fn send_state(widget_uid: &str, widget: &TranslatorWidget, outbound: &Outbound) {
    let _ = outbound.send(ServerMessage::WidgetState(widget.view(widget_uid).await));
}
