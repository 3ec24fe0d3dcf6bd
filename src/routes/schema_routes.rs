use axum::{Router, routing::get};

use crate::{AppState, controllers::schema_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/schema", get(schema_controller::get_schema))
}
