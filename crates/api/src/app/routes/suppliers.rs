use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use stockmgr_core::{DomainError, SupplierId};
use stockmgr_suppliers::{AddSupplier, UpdateSupplier};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_suppliers).post(add_supplier))
        .route(
            "/:id",
            get(get_supplier).patch(update_supplier).delete(delete_supplier),
        )
}

pub async fn list_suppliers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.read(|s| {
        s.suppliers()
            .iter()
            .map(dto::supplier_to_json)
            .collect::<Vec<_>>()
    });
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn add_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::SupplierRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let cmd = AddSupplier {
        name: body.name,
        contact: body.contact,
    };

    match services.write(|s| s.add_supplier(&cmd)) {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id.to_string() })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let supplier_id: SupplierId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let found = services.read(|s| s.supplier(supplier_id).map(dto::supplier_to_json));
    match found {
        Some(json) => (StatusCode::OK, Json(json)).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found(format!("supplier {id}"))),
    }
}

pub async fn update_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    payload: Result<Json<dto::SupplierRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let supplier_id: SupplierId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let cmd = UpdateSupplier {
        supplier_id,
        name: body.name,
        contact: body.contact,
    };

    match services.write(|s| s.update_supplier(&cmd)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let supplier_id: SupplierId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.write(|s| s.delete_supplier(supplier_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
