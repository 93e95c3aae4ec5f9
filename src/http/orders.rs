use super::{ApiError, AppState};
use crate::model::{CreateOrderRequest, Order, OrderId};
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};
use serde::Deserialize;

/// Body of `POST /api/orders/{id}/discount`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyDiscountRequest {
    #[serde(default)]
    pub discount_code: Option<String>,
}

/// `POST /api/orders`
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let order = state.orders.create_order(request).await?;
    Ok(Json(order))
}

/// `GET /api/orders`
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.list_orders().await?))
}

/// `GET /api/orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Order>, ApiError> {
    let id = order_id(id)?;
    Ok(Json(state.orders.get_order(id).await?))
}

/// `POST /api/orders/{id}/discount`: attach a code and reprice.
pub async fn apply_discount(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    body: Result<Json<ApplyDiscountRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let id = order_id(id)?;
    let Json(request) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let order = state.orders.apply_discount(id, request.discount_code).await?;
    Ok(Json(order))
}

fn order_id(path: Result<Path<u32>, PathRejection>) -> Result<OrderId, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    Ok(OrderId(id))
}
