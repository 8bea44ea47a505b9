use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use showroom_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_products).post(create_product))
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Optional single-record lookup, `GET /products?id=<int>`.
    pub id: Option<String>,
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ListProductsQuery>,
) -> axum::response::Response {
    let Some(raw) = query.id else {
        let items = services
            .products_list()
            .await
            .iter()
            .map(dto::product_to_json)
            .collect::<Vec<_>>();
        return (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response();
    };

    let id: ProductId = match raw.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_get(id).await {
        Some(p) => (StatusCode::OK, Json(dto::product_to_json(p))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let accepted = match services.products_accept(draft).await {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Product added successfully",
            "product": dto::draft_to_json(&accepted.draft),
            "accepted_at": accepted.accepted_at.to_rfc3339(),
        })),
    )
        .into_response()
}
