use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::services::quote_service::{self, Quote};
use crate::services::{account_service, trading_service};
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateAccount {
    pub user_id: String,
}

// POST /api/trading/account
pub async fn post_create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccount>,
) -> Result<Json<Value>, ApiError> {
    let (id, acct) = account_service::open_account(&state, &payload.user_id).await?;

    Ok(Json(json!({
        "id": id,
        "message": "Account created",
        "cash_balance": acct.cash_balance,
    })))
}

#[derive(Deserialize)]
pub struct QuoteParams {
    pub symbol: String,
}

// GET /api/trading/quote?symbol=X — pure, needs no store.
pub async fn get_quote(Query(params): Query<QuoteParams>) -> Json<Quote> {
    Json(quote_service::quote(&params.symbol))
}

#[derive(Deserialize)]
pub struct PlaceOrder {
    pub user_id: String,
    pub symbol: String,
    pub side: String,
    pub quantity: f64,
}

// POST /api/trading/order
pub async fn post_place_order(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrder>,
) -> Result<Json<Value>, ApiError> {
    let fill = trading_service::place_order(
        &state,
        &payload.user_id,
        &payload.symbol,
        &payload.side,
        payload.quantity,
    )
    .await?;

    Ok(Json(json!({
        "id": fill.order_id,
        "status": "filled",
        "price": fill.price,
        "cash_balance": fill.cash_balance,
        "positions": fill.positions,
    })))
}

#[derive(Deserialize)]
pub struct PortfolioParams {
    pub user_id: String,
}

// GET /api/trading/portfolio?user_id=X
pub async fn get_portfolio(
    State(state): State<AppState>,
    Query(params): Query<PortfolioParams>,
) -> Result<Json<Value>, ApiError> {
    let acct = account_service::find_account(&state, &params.user_id)
        .await
        .map_err(ApiError::database)?
        .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))?;

    Ok(Json(json!({
        "id": acct.id.to_hex(),
        "user_id": acct.user_id,
        "cash_balance": acct.cash_balance,
        "positions": acct.positions,
    })))
}
