use std::collections::HashMap;

pub mod db_init;
pub mod store;

pub mod account_service;
pub mod catalog_service;
pub mod quote_service;
pub mod schema_registry;
pub mod trading_service;
pub mod video_service;

/// Field name -> human-readable problem, collected during payload validation.
pub type FieldErrors = HashMap<String, String>;

/// Failure modes shared by the create/list services.
#[derive(Debug)]
pub enum ServiceError {
    /// Bad request fields; nothing was persisted.
    Invalid(FieldErrors),
    /// Store failure.
    Db(String),
}

/// The store handle is optional at startup; every store-backed service resolves
/// it through here so the failure reads the same everywhere.
pub(crate) fn store_handle(state: &crate::AppState) -> Result<&mongodb::Database, String> {
    state
        .db
        .as_ref()
        .ok_or_else(|| "store not configured".to_string())
}
