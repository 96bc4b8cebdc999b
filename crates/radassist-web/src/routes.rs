//! Router and request handlers.

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use radassist_core::{FormRenderer, Interaction, PageSettings};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::html;

/// Shared, read-only state for all requests.
#[derive(Debug, Clone)]
pub struct AppState {
    renderer: FormRenderer,
    name: String,
    version: String,
}

impl AppState {
    /// Create state for a renderer built from the given page settings.
    pub fn new(settings: PageSettings) -> Self {
        Self {
            renderer: FormRenderer::new(settings),
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// The renderer used for every pass.
    pub fn renderer(&self) -> &FormRenderer {
        &self.renderer
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PageSettings::default())
    }
}

/// Widget state carried by a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormFields {
    /// Value of the name input.
    pub name: Option<String>,
    /// Present when the button was clicked; the value is ignored.
    pub say_hello: Option<String>,
}

impl From<FormFields> for Interaction {
    fn from(fields: FormFields) -> Self {
        Interaction {
            user_name: fields.name,
            activated: fields.say_hello.is_some(),
        }
    }
}

/// Liveness probe body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Server crate name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_page).post(submit_page))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn show_page(
    State(state): State<Arc<AppState>>,
    Query(fields): Query<FormFields>,
) -> Html<String> {
    render(&state, fields)
}

async fn submit_page(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    render(&state, fields)
}

fn render(state: &AppState, fields: FormFields) -> Html<String> {
    let page = state.renderer.render(&fields.into());
    Html(html::render_page(&page))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        name: state.name.clone(),
        version: state.version.clone(),
    })
}
