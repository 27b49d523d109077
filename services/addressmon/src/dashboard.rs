//! Web dashboard serving the rendered address table

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::loader::TableLoader;
use crate::render::render_page;
use crate::session::Session;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub loader: Arc<TableLoader>,
}

/// Build the dashboard axum router
pub fn build_router(loader: Arc<TableLoader>) -> Router {
    let dashboard_state = DashboardState { loader };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/table", get(table_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

/// Every page load is a fresh session; nothing is cached between requests
async fn index_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let mut session = Session::new();
    session.refresh(&dashboard.loader).await;
    Html(render_page(session.table()))
}

async fn table_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    match dashboard.loader.load().await {
        Ok(table) => (StatusCode::OK, axum::Json(serde_json::json!(table))),
        Err(e) => {
            tracing::warn!("Table request failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                axum::Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
