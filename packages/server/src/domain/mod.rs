//! Domain layer: value objects and the traits the usecase layer depends on.
//!
//! The concrete implementations live in the infrastructure layer
//! (dependency inversion).

mod connection;
mod message;
mod pusher;
mod registry;
mod room;
mod session;

pub use connection::ConnectionId;
pub use message::ChatMessage;
pub use pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use registry::{RoomRegistry, RoomSnapshot};
pub use room::{DEFAULT_ROOM, RoomId};
pub use session::Session;

#[cfg(test)]
pub use pusher::MockMessagePusher;
