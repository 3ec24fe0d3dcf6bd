use axum::{Router, routing::post};

use crate::{AppState, controllers::products_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(
        "/api/products",
        post(products_controller::create_product).get(products_controller::list_products),
    )
}
