use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

use crate::state::AppState;
use crate::widget::{render_widget, TargetLanguage, TranslatorWidget, WidgetView};

type ApiError = (StatusCode, Json<Value>);

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // WebSocket
        .route("/widget-ws", get(websocket_handler))

        // Browser widget
        .route("/", get(open_widget))
        .route(
            "/widget/:uid",
            get(show_widget).post(submit_widget).delete(close_widget),
        )

        // REST API routes
        .route("/api/health", get(health_check))
        .route("/api/languages", get(get_languages))
        .route("/api/widget/:uid", get(get_widget_state))
}

/// Form fields posted by the widget page
#[derive(Debug, Deserialize)]
pub struct WidgetForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target: String,
}

async fn websocket_handler(
    ws: axum::extract::ws::WebSocketUpgrade,
    State(state): State<AppState>,
) -> axum::response::Response {
    crate::websocket::websocket_handler(ws, State(state)).await
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_languages() -> Json<Value> {
    let languages: Vec<Value> = TargetLanguage::ALL
        .iter()
        .map(|lang| json!({ "code": lang.code(), "label": lang.label() }))
        .collect();
    Json(json!(languages))
}

fn lookup(state: &AppState, uid: &str) -> Result<Arc<TranslatorWidget>, ApiError> {
    state.widget(uid).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Unknown widget: {}", uid) })),
        )
    })
}

async fn open_widget(State(state): State<AppState>) -> Redirect {
    let (uid, _) = state.open_widget();
    info!("Opened widget {}", uid);
    Redirect::to(&format!("/widget/{}", uid))
}

async fn show_widget(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Html<String>, ApiError> {
    let widget = lookup(&state, &uid)?;
    Ok(Html(render_widget(&uid, &widget.snapshot().await)))
}

async fn submit_widget(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Form(form): Form<WidgetForm>,
) -> Result<Html<String>, ApiError> {
    let widget = lookup(&state, &uid)?;
    let outcome = widget.submit(form.text, form.target).await;
    debug!("Widget {} translate: {:?}", uid, outcome);
    Ok(Html(render_widget(&uid, &widget.snapshot().await)))
}

async fn close_widget(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<StatusCode, ApiError> {
    lookup(&state, &uid)?;
    state.close_widget(&uid);
    info!("Closed widget {}", uid);
    Ok(StatusCode::NO_CONTENT)
}

async fn get_widget_state(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<WidgetView>, ApiError> {
    let widget = lookup(&state, &uid)?;
    Ok(Json(widget.view(&uid).await))
}
