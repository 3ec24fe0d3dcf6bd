use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Parses the wire value. Anything other than "buy"/"sell" is a client
    /// error and must be rejected before any account lookup.
    pub fn parse(s: &str) -> Option<Side> {
        match s {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Filled,
    Rejected,
}

/// Append-only order log entry; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub user_id: String,
    pub symbol: String,
    pub side: Side,
    pub quantity: f64,
    pub price: f64,
    pub status: OrderStatus,
    pub reason: Option<String>,
}

impl Order {
    pub fn filled(user_id: &str, symbol: &str, side: Side, quantity: f64, price: f64) -> Self {
        Self {
            id: ObjectId::new(),
            user_id: user_id.to_string(),
            symbol: symbol.to_string(),
            side,
            quantity,
            price,
            status: OrderStatus::Filled,
            reason: None,
        }
    }

    pub fn rejected(
        user_id: &str,
        symbol: &str,
        side: Side,
        quantity: f64,
        price: f64,
        reason: &str,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            user_id: user_id.to_string(),
            symbol: symbol.to_string(),
            side,
            quantity,
            price,
            status: OrderStatus::Rejected,
            reason: Some(reason.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_round_trips_through_lowercase_strings() {
        assert_eq!(Side::parse("buy"), Some(Side::Buy));
        assert_eq!(Side::parse("sell"), Some(Side::Sell));
        assert_eq!(Side::parse("hold"), None);
        assert_eq!(Side::parse("BUY"), None);

        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&OrderStatus::Rejected).unwrap(), "\"rejected\"");
    }

    #[test]
    fn rejected_orders_carry_their_reason() {
        let order = Order::rejected("u-1", "AAA", Side::Sell, 10.0, 215.65, "Not enough shares");
        assert_eq!(order.status, OrderStatus::Rejected);
        assert_eq!(order.reason.as_deref(), Some("Not enough shares"));

        let order = Order::filled("u-1", "AAA", Side::Buy, 10.0, 215.65);
        assert_eq!(order.status, OrderStatus::Filled);
        assert!(order.reason.is_none());
    }
}
