//! Thin pass-through adapter over named MongoDB collections.
//!
//! Collection names are the ones the external admin UI already reads from this
//! database, so they must not change.

use futures_util::StreamExt;
use mongodb::Database;
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const PRODUCTS: &str = "product";
pub const VIDEOS: &str = "video";
pub const ACCOUNTS: &str = "tradeaccount";
pub const ORDERS: &str = "order";

/// Inserts one record and returns the generated id as a hex string.
pub async fn create<T>(db: &Database, collection: &str, record: &T) -> Result<String, String>
where
    T: Serialize,
{
    let col = db.collection::<Document>(collection);
    let doc = mongodb::bson::to_document(record).map_err(|e| e.to_string())?;

    let res = col.insert_one(doc, None).await.map_err(|e| e.to_string())?;

    match res.inserted_id {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        other => Ok(other.to_string()),
    }
}

/// Lists every record in a collection, in store order.
pub async fn list<T>(db: &Database, collection: &str) -> Result<Vec<T>, String>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let col = db.collection::<T>(collection);
    let mut cursor = col.find(None, None).await.map_err(|e| e.to_string())?;

    let mut out: Vec<T> = vec![];
    while let Some(res) = cursor.next().await {
        out.push(res.map_err(|e| e.to_string())?);
    }
    Ok(out)
}

/// Exact-match lookup on a single field. The only lookups the API performs are
/// account-by-user_id and record-by-generated-id.
pub async fn find_by_field<T>(
    db: &Database,
    collection: &str,
    field: &str,
    value: impl Into<Bson>,
) -> Result<Option<T>, String>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let mut filter = Document::new();
    filter.insert(field, value.into());

    let col = db.collection::<T>(collection);
    col.find_one(filter, None).await.map_err(|e| e.to_string())
}
