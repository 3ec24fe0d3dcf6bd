use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

pub mod home_routes;
pub mod product_routes;
pub mod schema_routes;
pub mod trading_routes;
pub mod video_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = product_routes::add_routes(router);
    let router = video_routes::add_routes(router);
    let router = trading_routes::add_routes(router);
    let router = schema_routes::add_routes(router);

    // Open CORS: the original backend served arbitrary frontends.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).with_state(state)
}
