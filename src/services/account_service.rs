use std::collections::HashMap;

use mongodb::bson::doc;

use crate::AppState;
use crate::models::TradeAccount;

use super::{FieldErrors, ServiceError, store, store_handle};

/// Looks up an account by user id. Uniqueness is not enforced; the first
/// match wins.
pub async fn find_account(state: &AppState, user_id: &str) -> Result<Option<TradeAccount>, String> {
    let db = store_handle(state)?;
    store::find_by_field(db, store::ACCOUNTS, "user_id", user_id).await
}

/// Opens a new account with the default starting balance. Always inserts,
/// even when the user already has one.
pub async fn open_account(
    state: &AppState,
    user_id: &str,
) -> Result<(String, TradeAccount), ServiceError> {
    let mut errs: FieldErrors = HashMap::new();
    if user_id.trim().is_empty() {
        errs.insert("user_id".into(), "Missing user id.".into());
        return Err(ServiceError::Invalid(errs));
    }

    let acct = TradeAccount::open(user_id);
    let db = store_handle(state).map_err(ServiceError::Db)?;
    let id = store::create(db, store::ACCOUNTS, &acct)
        .await
        .map_err(ServiceError::Db)?;

    Ok((id, acct))
}

/// Gets the user's account, creating it with defaults when missing.
pub async fn get_or_create_account(
    state: &AppState,
    user_id: &str,
) -> Result<TradeAccount, String> {
    if let Some(acct) = find_account(state, user_id).await? {
        return Ok(acct);
    }

    let acct = TradeAccount::open(user_id);
    let db = store_handle(state)?;
    store::create(db, store::ACCOUNTS, &acct).await?;

    Ok(acct)
}

/// Persists the cash/positions snapshot produced by a fill.
pub async fn save_account_state(state: &AppState, acct: &TradeAccount) -> Result<(), String> {
    let db = store_handle(state)?;
    let accounts = db.collection::<TradeAccount>(store::ACCOUNTS);

    let positions = mongodb::bson::to_bson(&acct.positions).map_err(|e| e.to_string())?;
    accounts
        .update_one(
            doc! { "_id": acct.id },
            doc! { "$set": { "cash_balance": acct.cash_balance, "positions": positions } },
            None,
        )
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
