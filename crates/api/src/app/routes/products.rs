use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use stockmgr_core::{DomainError, DomainResult, ProductId};
use stockmgr_inventory::{StockIn, StockOut};
use stockmgr_products::{EditProduct, RegisterProduct};
use stockmgr_reports::{current_stock_report, product_detail};
use stockmgr_store::InventoryStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(register_product))
        .route(
            "/:code",
            get(get_product).patch(edit_product).delete(delete_product),
        )
        .route("/:code/stock-in", post(stock_in))
        .route("/:code/stock-out", post(stock_out))
}

fn product_id_by_code(store: &InventoryStore, code: &str) -> DomainResult<ProductId> {
    store
        .find_product_by_code(code)
        .map(|p| p.id_typed())
        .ok_or_else(|| DomainError::not_found(format!("product {code}")))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.read(|s| current_stock_report(s).lines);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn register_product(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::RegisterProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let initial_quantity = match body.initial_quantity.as_ref().map(|q| q.quantity()).transpose() {
        Ok(q) => q.unwrap_or(0),
        Err(e) => return errors::domain_error_to_response(e),
    };

    let cmd = RegisterProduct {
        code: body.code,
        name: body.name,
        supplier_id: body.supplier_id,
        initial_quantity,
        occurred_at: Utc::now(),
    };

    match services.write(|s| s.register_product(&cmd)) {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "id": id.to_string(),
                "code": cmd.code.trim(),
                "quantity": initial_quantity,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    let detail = services.read(|s| product_detail(s, product_id_by_code(s, &code)?));

    match detail {
        Ok(detail) => {
            let text = detail.to_string();
            (
                StatusCode::OK,
                Json(serde_json::json!({ "product": detail, "text": text })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn edit_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
    payload: Result<Json<dto::EditProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let result = services.write(|s| {
        let product_id = product_id_by_code(s, &code)?;
        s.edit_product(&EditProduct {
            product_id,
            name: body.name,
            supplier_id: body.supplier_id,
        })
    });

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    let result = services.write(|s| {
        let product_id = product_id_by_code(s, &code)?;
        s.delete_product(product_id)
    });

    match result {
        Ok(removed) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "code": code,
                "movements_removed": removed,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn stock_in(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
    payload: Result<Json<dto::StockInRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let amount = match body.amount.amount() {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let result = services.write(|s| {
        let product_id = product_id_by_code(s, &code)?;
        s.stock_in(&StockIn {
            product_id,
            supplier_id: body.supplier_id,
            amount,
            note: body.note,
            occurred_at: Utc::now(),
        })
    });

    quantity_response(&code, result)
}

pub async fn stock_out(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
    payload: Result<Json<dto::StockOutRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let amount = match body.amount.amount() {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let result = services.write(|s| {
        let product_id = product_id_by_code(s, &code)?;
        s.stock_out(&StockOut {
            product_id,
            amount,
            note: body.note,
            occurred_at: Utc::now(),
        })
    });

    quantity_response(&code, result)
}

fn quantity_response(code: &str, result: DomainResult<i64>) -> axum::response::Response {
    match result {
        Ok(quantity) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "code": code,
                "quantity": quantity,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
