//! Wire-format DTOs, kept separate from the domain models.

pub mod http;
pub mod websocket;
