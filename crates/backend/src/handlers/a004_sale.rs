use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a004_sale;
use contracts::domain::a004_sale::aggregate::{PaymentDto, Sale, SaleDto};

/// GET /api/sales
pub async fn list_all() -> Result<Json<Vec<Sale>>, axum::http::StatusCode> {
    match a004_sale::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/sales/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Sale>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_sale::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/sales
pub async fn upsert(
    Json(dto): Json<SaleDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a004_sale::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a004_sale::service::create(dto).await.map(|id| id.to_string())
    };

    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/sales/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_sale::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/sales/:id/payments
///
/// Returns the updated sale so the client patches its local copy instead
/// of refetching the collection.
pub async fn add_payment(
    Path(id): Path<String>,
    Json(dto): Json<PaymentDto>,
) -> Result<Json<Sale>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_sale::service::add_payment(uuid, dto).await {
        Ok(Some(sale)) => Ok(Json(sale)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}

/// DELETE /api/sales/:id/payments/:payment_id
pub async fn delete_payment(
    Path((id, payment_id)): Path<(String, String)>,
) -> Result<Json<Sale>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_sale::service::delete_payment(uuid, &payment_id).await {
        Ok(Some(sale)) => Ok(Json(sale)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
