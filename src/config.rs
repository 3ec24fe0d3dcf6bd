use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: Option<String>,
    pub mongodb_db: Option<String>,
    pub host: String,
    pub port: u16,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let mongodb_uri = env::var("MONGODB_URI").ok().filter(|s| !s.trim().is_empty());
    let mongodb_db = env::var("MONGODB_DB").ok().filter(|s| !s.trim().is_empty());

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    Settings {
        mongodb_uri,
        mongodb_db,
        host,
        port,
    }
}
