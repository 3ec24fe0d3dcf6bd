use axum::Json;
use serde_json::Value;

use crate::services::schema_registry;

// GET /schema — record-type descriptors for the external admin UI.
pub async fn get_schema() -> Json<Value> {
    Json(schema_registry::registry())
}
