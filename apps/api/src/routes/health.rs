use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Next Hire API! 🚀" }))
}

/// GET /api/health
/// Never touches the model provider.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
