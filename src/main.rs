use std::net::SocketAddr;

use mongodb::Client;

use papermarket::{AppState, config, routes, services};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    // Mongo connection is optional: a missing or broken configuration degrades
    // the /test diagnostic and the store-backed endpoints, nothing else.
    let db = match (&settings.mongodb_uri, &settings.mongodb_db) {
        (Some(uri), Some(name)) => match Client::with_uri_str(uri).await {
            Ok(client) => Some(client.database(name)),
            Err(e) => {
                tracing::warn!("failed to build MongoDB client: {e}");
                None
            }
        },
        _ => {
            tracing::warn!("MONGODB_URI / MONGODB_DB not set; running without a store");
            None
        }
    };

    if let Some(db) = &db {
        if let Err(e) = services::db_init::ensure_indexes(db).await {
            tracing::warn!("index setup failed: {e}");
        }
    }

    let state = AppState {
        db,
        settings: settings.clone(),
        order_locks: Default::default(),
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((settings.host.parse::<std::net::IpAddr>().unwrap(), settings.port));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
