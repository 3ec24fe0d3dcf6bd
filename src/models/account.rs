use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Starting cash for a freshly opened paper-trading account.
pub const STARTING_CASH: f64 = 10_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeAccount {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Owning user. Not unique: opening twice yields two documents and the
    /// order engine uses the first match.
    pub user_id: String,
    pub cash_balance: f64,
    /// Symbol -> shares owned.
    pub positions: HashMap<String, f64>,
}

impl TradeAccount {
    pub fn open(user_id: &str) -> Self {
        Self {
            id: ObjectId::new(),
            user_id: user_id.to_string(),
            cash_balance: STARTING_CASH,
            positions: HashMap::new(),
        }
    }
}
