use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User-submitted video link; everything past the title is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub creator: Option<String>,
}
