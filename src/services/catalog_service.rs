use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;

use crate::AppState;
use crate::models::Product;

use super::{FieldErrors, ServiceError, store, store_handle};

fn validate(title: &str, price: f64, category: &str) -> FieldErrors {
    let mut errs: FieldErrors = HashMap::new();

    if title.trim().is_empty() {
        errs.insert("title".into(), "Missing title.".into());
    }
    if price < 0.0 {
        errs.insert("price".into(), "Price must be zero or more.".into());
    }
    if category.trim().is_empty() {
        errs.insert("category".into(), "Missing category.".into());
    }

    errs
}

/// Validates and stores a new catalog entry, returning its id. Products are
/// immutable after creation; there is no update path.
pub async fn create_product(
    state: &AppState,
    title: &str,
    description: Option<&str>,
    price: f64,
    category: &str,
) -> Result<String, ServiceError> {
    let errs = validate(title, price, category);
    if !errs.is_empty() {
        return Err(ServiceError::Invalid(errs));
    }

    let product = Product {
        id: ObjectId::new(),
        title: title.to_string(),
        description: description.map(|s| s.to_string()),
        price,
        category: category.to_string(),
        in_stock: true,
    };

    let db = store_handle(state).map_err(ServiceError::Db)?;
    store::create(db, store::PRODUCTS, &product)
        .await
        .map_err(ServiceError::Db)
}

pub async fn list_products(state: &AppState) -> Result<Vec<Product>, ServiceError> {
    let db = store_handle(state).map_err(ServiceError::Db)?;
    store::list(db, store::PRODUCTS).await.map_err(ServiceError::Db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_product() {
        assert!(validate("Desk lamp", 24.99, "home").is_empty());
    }

    #[test]
    fn free_products_are_allowed() {
        assert!(validate("Sticker", 0.0, "swag").is_empty());
    }

    #[test]
    fn rejects_negative_price() {
        let errs = validate("Desk lamp", -1.0, "home");
        assert!(errs.contains_key("price"));
    }

    #[test]
    fn rejects_blank_title_and_category() {
        let errs = validate("  ", 10.0, "");
        assert!(errs.contains_key("title"));
        assert!(errs.contains_key("category"));
    }
}
