use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;

use crate::AppState;
use crate::models::Video;

use super::{FieldErrors, ServiceError, store, store_handle};

fn validate(title: &str) -> FieldErrors {
    let mut errs: FieldErrors = HashMap::new();
    if title.trim().is_empty() {
        errs.insert("title".into(), "Missing title.".into());
    }
    errs
}

pub struct NewVideo<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub video_url: Option<&'a str>,
    pub thumbnail_url: Option<&'a str>,
    pub creator: Option<&'a str>,
}

/// Validates and stores a video entry, returning its id.
pub async fn create_video(state: &AppState, new: NewVideo<'_>) -> Result<String, ServiceError> {
    let errs = validate(new.title);
    if !errs.is_empty() {
        return Err(ServiceError::Invalid(errs));
    }

    let video = Video {
        id: ObjectId::new(),
        title: new.title.to_string(),
        description: new.description.map(|s| s.to_string()),
        video_url: new.video_url.map(|s| s.to_string()),
        thumbnail_url: new.thumbnail_url.map(|s| s.to_string()),
        creator: new.creator.map(|s| s.to_string()),
    };

    let db = store_handle(state).map_err(ServiceError::Db)?;
    store::create(db, store::VIDEOS, &video)
        .await
        .map_err(ServiceError::Db)
}

pub async fn list_videos(state: &AppState) -> Result<Vec<Video>, ServiceError> {
    let db = store_handle(state).map_err(ServiceError::Db)?;
    store::list(db, store::VIDEOS).await.map_err(ServiceError::Db)
}
