use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::AppState;
use crate::models::{Order, Side, TradeAccount};

use super::{FieldErrors, account_service, quote_service, store, store_handle};

pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds";
pub const NOT_ENOUGH_SHARES: &str = "Not enough shares";

/// One async mutex per account. Order execution is a read-modify-write of the
/// account document; without this, two concurrent orders for the same user can
/// validate against the same snapshot and the second write silently drops the
/// first (lost update).
#[derive(Clone, Default)]
pub struct OrderLocks {
    inner: Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>>,
}

impl OrderLocks {
    pub fn for_user(&self, user_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(user_id.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}

#[derive(Debug, Clone)]
pub struct Fill {
    pub order_id: String,
    pub price: f64,
    pub cash_balance: f64,
    pub positions: HashMap<String, f64>,
}

#[derive(Debug)]
pub enum OrderError {
    /// Bad input; nothing was persisted.
    Invalid(FieldErrors),
    /// Business-rule rejection; a rejected order record was appended.
    Rejected(&'static str),
    /// Store failure.
    Db(String),
}

/// Applies a fill to the account in place. On rejection the account is left
/// untouched. A position sold down to exactly zero drops out of the map.
fn apply_fill(
    acct: &mut TradeAccount,
    side: Side,
    symbol: &str,
    quantity: f64,
    price: f64,
) -> Result<(), &'static str> {
    let cost = price * quantity;

    match side {
        Side::Buy => {
            if cost > acct.cash_balance {
                return Err(INSUFFICIENT_FUNDS);
            }
            acct.cash_balance -= cost;
            *acct.positions.entry(symbol.to_string()).or_insert(0.0) += quantity;
        }
        Side::Sell => {
            let held = acct.positions.get(symbol).copied().unwrap_or(0.0);
            if held < quantity {
                return Err(NOT_ENOUGH_SHARES);
            }
            acct.cash_balance += cost;

            let remaining = held - quantity;
            if remaining == 0.0 {
                acct.positions.remove(symbol);
            } else {
                acct.positions.insert(symbol.to_string(), remaining);
            }
        }
    }

    Ok(())
}

/// Validates and executes one market order against the user's account.
///
/// Invalid input is refused before any quote or store access. Business-rule
/// rejections append a rejected order record and leave the account unchanged.
/// On success the account snapshot is persisted, then the filled order is
/// appended.
pub async fn place_order(
    state: &AppState,
    user_id: &str,
    symbol: &str,
    side: &str,
    quantity: f64,
) -> Result<Fill, OrderError> {
    let mut errs: FieldErrors = HashMap::new();

    if user_id.trim().is_empty() {
        errs.insert("user_id".into(), "Missing user id.".into());
    }
    if symbol.trim().is_empty() {
        errs.insert("symbol".into(), "Missing symbol.".into());
    }
    if !(quantity > 0.0) {
        errs.insert("quantity".into(), "Quantity must be positive.".into());
    }
    let Some(side) = Side::parse(side) else {
        errs.insert("side".into(), "Side must be \"buy\" or \"sell\".".into());
        return Err(OrderError::Invalid(errs));
    };
    if !errs.is_empty() {
        return Err(OrderError::Invalid(errs));
    }

    let quote = quote_service::quote(symbol);
    let symbol = quote.symbol.as_str();

    let db = store_handle(state).map_err(OrderError::Db)?;

    // Serialize the read-modify-write below per account.
    let lock = state.order_locks.for_user(user_id);
    let _guard = lock.lock().await;

    let mut acct = account_service::get_or_create_account(state, user_id)
        .await
        .map_err(OrderError::Db)?;

    if let Err(reason) = apply_fill(&mut acct, side, symbol, quantity, quote.price) {
        let rejected = Order::rejected(user_id, symbol, side, quantity, quote.price, reason);
        store::create(db, store::ORDERS, &rejected)
            .await
            .map_err(OrderError::Db)?;
        return Err(OrderError::Rejected(reason));
    }

    account_service::save_account_state(state, &acct)
        .await
        .map_err(OrderError::Db)?;

    let filled = Order::filled(user_id, symbol, side, quantity, quote.price);
    let order_id = store::create(db, store::ORDERS, &filled)
        .await
        .map_err(OrderError::Db)?;

    Ok(Fill {
        order_id,
        price: quote.price,
        cash_balance: acct.cash_balance,
        positions: acct.positions,
    })
}
