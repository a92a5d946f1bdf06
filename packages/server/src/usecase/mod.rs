//! Usecase layer: one struct per inbound event kind, driving the room
//! registry and the message pusher through their domain traits.

mod connect;
mod disconnect;
mod join_room;
mod list_rooms;
mod send_message;

pub use connect::ConnectUseCase;
pub use disconnect::DisconnectUseCase;
pub use join_room::{JoinOutcome, JoinRoomUseCase};
pub use list_rooms::ListRoomsUseCase;
pub use send_message::SendMessageUseCase;
