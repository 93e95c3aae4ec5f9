//! Error type returned by the HTTP handlers and its JSON rendering.

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors returned to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    ProductNotFound(String),
    #[error("{0}")]
    InsufficientInventory(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::ProductNotFound(_) => StatusCode::BAD_REQUEST,
            ApiError::InsufficientInventory(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::ProductNotFound(_) => "product_not_found",
            ApiError::InsufficientInventory(_) => "insufficient_inventory",
            ApiError::NotFound(_) => "not_found",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        let message = e.to_string();
        match e {
            OrderError::InvalidRequest(_) => ApiError::InvalidRequest(message),
            OrderError::ProductNotFound(_) => ApiError::ProductNotFound(message),
            OrderError::InsufficientInventory { .. } => ApiError::InsufficientInventory(message),
            OrderError::NotFound(_) => ApiError::NotFound(message),
            OrderError::ActorCommunicationError(_) => ApiError::Internal(message),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        ApiError::from(OrderError::from(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": self.kind(),
            "message": message,
        }));

        (status, body).into_response()
    }
}
