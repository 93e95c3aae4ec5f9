use super::{ApiError, AppState};
use crate::model::Product;
use axum::{extract::State, Json};

/// `GET /api/products`: the whole catalog, ordered by id.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list_products().await?;
    Ok(Json(products))
}
