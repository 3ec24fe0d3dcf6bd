//! Static JSON Schema registry backing `GET /schema`.
//!
//! The external admin UI drives its forms and validation off this output, so
//! field names, constraints, defaults, and descriptions must stay in sync with
//! the stored documents. One hand-written descriptor per declared record type;
//! nothing here is derived at runtime.

use serde_json::{Value, json};

pub fn registry() -> Value {
    json!({
        "User": user_schema(),
        "Product": product_schema(),
        "Video": video_schema(),
        "TradeAccount": trade_account_schema(),
        "Order": order_schema(),
    })
}

fn optional_string(title: &str, description: &str) -> Value {
    json!({
        "anyOf": [ { "type": "string" }, { "type": "null" } ],
        "default": null,
        "title": title,
        "description": description,
    })
}

fn user_schema() -> Value {
    json!({
        "title": "User",
        "type": "object",
        "properties": {
            "name": { "title": "Name", "type": "string", "description": "Full name" },
            "email": { "title": "Email", "type": "string", "description": "Email address" },
            "address": { "title": "Address", "type": "string", "description": "Address" },
            "age": {
                "anyOf": [
                    { "type": "integer", "minimum": 0, "maximum": 120 },
                    { "type": "null" }
                ],
                "default": null,
                "title": "Age",
                "description": "Age in years",
            },
            "is_active": {
                "title": "Is Active",
                "type": "boolean",
                "default": true,
                "description": "Whether user is active",
            },
        },
        "required": ["name", "email", "address"],
    })
}

fn product_schema() -> Value {
    json!({
        "title": "Product",
        "type": "object",
        "properties": {
            "title": { "title": "Title", "type": "string", "description": "Product title" },
            "description": optional_string("Description", "Product description"),
            "price": {
                "title": "Price",
                "type": "number",
                "minimum": 0,
                "description": "Price in dollars",
            },
            "category": { "title": "Category", "type": "string", "description": "Product category" },
            "in_stock": {
                "title": "In Stock",
                "type": "boolean",
                "default": true,
                "description": "Whether product is in stock",
            },
        },
        "required": ["title", "price", "category"],
    })
}

fn video_schema() -> Value {
    json!({
        "title": "Video",
        "type": "object",
        "properties": {
            "title": { "title": "Title", "type": "string", "description": "Video title" },
            "description": optional_string("Description", "Video description"),
            "video_url": optional_string("Video Url", "Hosted video URL (e.g., YouTube link)"),
            "thumbnail_url": optional_string("Thumbnail Url", "Optional thumbnail URL"),
            "creator": optional_string("Creator", "Creator name or user id"),
        },
        "required": ["title"],
    })
}

fn trade_account_schema() -> Value {
    json!({
        "title": "TradeAccount",
        "type": "object",
        "properties": {
            "user_id": { "title": "User Id", "type": "string", "description": "User identifier" },
            "cash_balance": {
                "title": "Cash Balance",
                "type": "number",
                "minimum": 0,
                "default": 10000.0,
                "description": "Available cash for trading",
            },
            "positions": {
                "title": "Positions",
                "type": "object",
                "additionalProperties": { "type": "number" },
                "default": {},
                "description": "Symbol -> shares owned",
            },
        },
        "required": ["user_id"],
    })
}

fn order_schema() -> Value {
    json!({
        "title": "Order",
        "type": "object",
        "properties": {
            "user_id": { "title": "User Id", "type": "string", "description": "User identifier" },
            "symbol": { "title": "Symbol", "type": "string", "description": "Ticker symbol" },
            "side": {
                "title": "Side",
                "type": "string",
                "enum": ["buy", "sell"],
                "description": "Buy or sell",
            },
            "quantity": {
                "title": "Quantity",
                "type": "number",
                "exclusiveMinimum": 0,
                "description": "Number of shares",
            },
            "price": {
                "title": "Price",
                "type": "number",
                "exclusiveMinimum": 0,
                "description": "Execution price per share",
            },
            "status": {
                "title": "Status",
                "type": "string",
                "enum": ["filled", "rejected"],
                "default": "filled",
                "description": "Order status",
            },
            "reason": optional_string("Reason", "If rejected, reason"),
        },
        "required": ["user_id", "symbol", "side", "quantity", "price"],
    })
}
