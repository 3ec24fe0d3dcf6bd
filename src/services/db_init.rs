use mongodb::{Database, IndexModel, bson::doc};

use super::store;

/// Best-effort index setup at startup. The account lookup by user id is the
/// only repeated query; everything else is full-collection listing.
pub async fn ensure_indexes(db: &Database) -> Result<(), String> {
    let col = db.collection::<mongodb::bson::Document>(store::ACCOUNTS);
    let model = IndexModel::builder().keys(doc! { "user_id": 1 }).build();

    col.create_index(model, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
