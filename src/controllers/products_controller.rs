use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, error::ApiError, models::Product, services::catalog_service};

#[derive(Deserialize)]
pub struct CreateProduct {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
}

fn product_json(p: &Product) -> Value {
    json!({
        "id": p.id.to_hex(),
        "title": p.title,
        "description": p.description,
        "price": p.price,
        "category": p.category,
        "in_stock": p.in_stock,
    })
}

// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> Result<Json<Value>, ApiError> {
    let id = catalog_service::create_product(
        &state,
        &payload.title,
        payload.description.as_deref(),
        payload.price,
        &payload.category,
    )
    .await?;

    Ok(Json(json!({ "id": id, "message": "Product created" })))
}

// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let products = catalog_service::list_products(&state).await?;
    let items: Vec<Value> = products.iter().map(product_json).collect();
    Ok(Json(Value::Array(items)))
}
