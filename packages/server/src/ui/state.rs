//! Shared application state for the request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::usecase::{
    ConnectUseCase, DisconnectUseCase, JoinRoomUseCase, ListRoomsUseCase, SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_usecase: Arc<ConnectUseCase>,
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub disconnect_usecase: Arc<DisconnectUseCase>,
    pub list_rooms_usecase: Arc<ListRoomsUseCase>,
    /// Directory the static assets (and its `emojis/` subdirectory) are
    /// served from.
    pub public_dir: PathBuf,
}
