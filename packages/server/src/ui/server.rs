//! Server execution logic.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::usecase::{
    ConnectUseCase, DisconnectUseCase, JoinRoomUseCase, ListRoomsUseCase, SendMessageUseCase,
};

use super::{
    handler::{get_rooms, health_check, list_emojis, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router over the shared state.
pub fn app(state: Arc<AppState>) -> Router {
    let serve_dir = ServeDir::new(&state.public_dir);
    Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket_handler))
        // HTTP endpoints
        .route("/api/health", get(health_check))
        .route("/api/emojis", get(list_emojis))
        .route("/api/rooms", get(get_rooms))
        // everything else falls through to the static assets
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Room-scoped WebSocket chat relay server.
pub struct Server {
    connect_usecase: Arc<ConnectUseCase>,
    join_room_usecase: Arc<JoinRoomUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    disconnect_usecase: Arc<DisconnectUseCase>,
    list_rooms_usecase: Arc<ListRoomsUseCase>,
    public_dir: PathBuf,
}

impl Server {
    pub fn new(
        connect_usecase: Arc<ConnectUseCase>,
        join_room_usecase: Arc<JoinRoomUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        disconnect_usecase: Arc<DisconnectUseCase>,
        list_rooms_usecase: Arc<ListRoomsUseCase>,
        public_dir: PathBuf,
    ) -> Self {
        Self {
            connect_usecase,
            join_room_usecase,
            send_message_usecase,
            disconnect_usecase,
            list_rooms_usecase,
            public_dir,
        }
    }

    /// Run the chat relay server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified
    /// address or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            connect_usecase: self.connect_usecase,
            join_room_usecase: self.join_room_usecase,
            send_message_usecase: self.send_message_usecase,
            disconnect_usecase: self.disconnect_usecase,
            list_rooms_usecase: self.list_rooms_usecase,
            public_dir: self.public_dir,
        });

        let app = app(app_state);

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("chat relay listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
