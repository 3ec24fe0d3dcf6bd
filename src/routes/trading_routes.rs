use axum::{Router, routing::{get, post}};

use crate::{AppState, controllers::trading_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/trading/account", post(trading_controller::post_create_account))
        .route("/api/trading/quote", get(trading_controller::get_quote))
        .route("/api/trading/order", post(trading_controller::post_place_order))
        .route("/api/trading/portfolio", get(trading_controller::get_portfolio))
}
