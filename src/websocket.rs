use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::handlers::{self, ServerMessage};
use crate::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (widget_uid, widget) = state.open_widget();
    info!("New WebSocket connection: {}", widget_uid);

    let (mut sender, mut receiver) = socket.split();

    // Translations finish on their own tasks, so every outgoing message goes
    // through one channel drained by this writer.
    let (outbound, mut outbound_rx) = mpsc::unbounded_channel::<ServerMessage>();
    let writer = tokio::spawn(async move {
        while let Some(msg) = outbound_rx.recv().await {
            let text = match serde_json::to_string(&msg) {
                Ok(text) => text,
                Err(e) => {
                    error!("Failed to encode message: {}", e);
                    continue;
                }
            };
            if let Err(e) = sender.send(Message::Text(text)).await {
                error!("Failed to send message: {}", e);
                break;
            }
        }
    });

    handlers::send_state(&widget_uid, &widget, &outbound).await;

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                // Keeps the session from expiring while the socket is in use
                state.widget(&widget_uid);
                if let Err(e) =
                    handlers::handle_message(&widget_uid, &widget, &text, &outbound).await
                {
                    error!("Error handling message: {}", e);
                }
            }
            Ok(Message::Close(_)) => {
                info!("WebSocket closed: {}", widget_uid);
                break;
            }
            Ok(_) => {
                debug!("Ignoring non-text frame from {}", widget_uid);
            }
            Err(e) => {
                error!("WebSocket error: {}", e);
                break;
            }
        }
    }

    state.close_widget(&widget_uid);
    writer.abort();
    info!("Cleaned up widget {}", widget_uid);
}
