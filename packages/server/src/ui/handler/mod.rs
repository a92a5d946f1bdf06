mod http;
mod websocket;

pub use http::{get_rooms, health_check, list_emojis};
pub use websocket::websocket_handler;
