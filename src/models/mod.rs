pub mod account;
pub mod order;
pub mod product;
pub mod video;

pub use account::TradeAccount;
pub use order::{Order, OrderStatus, Side};
pub use product::Product;
pub use video::Video;
