pub mod home_controller;
pub mod products_controller;
pub mod schema_controller;
pub mod trading_controller;
pub mod videos_controller;
