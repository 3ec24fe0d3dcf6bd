use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;

use crate::AppState;

// GET /
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Backend running",
        "endpoints": ["/api/products", "/api/videos", "/api/trading/*", "/test"],
    }))
}

fn truncated(msg: &str) -> String {
    msg.chars().take(50).collect()
}

// GET /test — store diagnostic. Degrades field by field, never errors.
pub async fn test_store(State(state): State<AppState>) -> impl IntoResponse {
    let mut database = "not available".to_string();
    let mut connection_status = "not connected";
    let mut collections: Vec<String> = vec![];

    if let Some(db) = &state.db {
        match db.list_collection_names(None).await {
            Ok(names) => {
                database = "connected".to_string();
                connection_status = "connected";
                collections = names.into_iter().take(10).collect();
            }
            Err(e) => {
                database = format!("error: {}", truncated(&e.to_string()));
            }
        }
    }

    Json(json!({
        "backend": "running",
        "database": database,
        "database_url": if state.settings.mongodb_uri.is_some() { "set" } else { "not set" },
        "database_name": if state.settings.mongodb_db.is_some() { "set" } else { "not set" },
        "connection_status": connection_status,
        "collections": collections,
    }))
}
