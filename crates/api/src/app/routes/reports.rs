use std::sync::Arc;

use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};

use stockmgr_reports::{current_stock_report, recent_movements_report};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/stock", get(stock_report))
        .route("/movements", get(movements_report))
}

pub async fn stock_report(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let report = services.read(current_stock_report);
    let text = report.to_string();
    Json(serde_json::json!({ "lines": report.lines, "text": text }))
}

pub async fn movements_report(
    Extension(services): Extension<Arc<AppServices>>,
) -> impl IntoResponse {
    let report = services.read(recent_movements_report);
    let text = report.to_string();
    Json(serde_json::json!({ "lines": report.lines, "text": text }))
}
