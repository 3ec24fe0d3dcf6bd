use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::services::video_service::{self, NewVideo};
use crate::{AppState, error::ApiError, models::Video};

#[derive(Deserialize)]
pub struct CreateVideo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
}

fn video_json(v: &Video) -> Value {
    json!({
        "id": v.id.to_hex(),
        "title": v.title,
        "description": v.description,
        "video_url": v.video_url,
        "thumbnail_url": v.thumbnail_url,
        "creator": v.creator,
    })
}

// POST /api/videos
pub async fn create_video(
    State(state): State<AppState>,
    Json(payload): Json<CreateVideo>,
) -> Result<Json<Value>, ApiError> {
    let id = video_service::create_video(
        &state,
        NewVideo {
            title: &payload.title,
            description: payload.description.as_deref(),
            video_url: payload.video_url.as_deref(),
            thumbnail_url: payload.thumbnail_url.as_deref(),
            creator: payload.creator.as_deref(),
        },
    )
    .await?;

    Ok(Json(json!({ "id": id, "message": "Video added" })))
}

// GET /api/videos
pub async fn list_videos(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let videos = video_service::list_videos(&state).await?;
    let items: Vec<Value> = videos.iter().map(video_json).collect();
    Ok(Json(Value::Array(items)))
}
