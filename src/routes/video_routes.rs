use axum::{Router, routing::post};

use crate::{AppState, controllers::videos_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(
        "/api/videos",
        post(videos_controller::create_video).get(videos_controller::list_videos),
    )
}
