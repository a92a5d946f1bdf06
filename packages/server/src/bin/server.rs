//! Room-scoped WebSocket chat relay server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-server
//! cargo run --bin parlor-server -- --host 0.0.0.0 --port 3000
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use parlor_server::{
    infrastructure::{pusher::WebSocketMessagePusher, registry::InMemoryRoomRegistry},
    ui::Server,
    usecase::{
        ConnectUseCase, DisconnectUseCase, JoinRoomUseCase, ListRoomsUseCase, SendMessageUseCase,
    },
};
use parlor_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "parlor-server")]
#[command(about = "Room-scoped WebSocket chat relay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3000")]
    port: u16,

    /// Directory to serve static assets (and emojis) from
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Registry + MessagePusher
    // 2. UseCases
    // 3. Server

    let registry = Arc::new(InMemoryRoomRegistry::new());
    let message_pusher = Arc::new(WebSocketMessagePusher::new());
    let clock = Arc::new(SystemClock);

    let connect_usecase = Arc::new(ConnectUseCase::new(message_pusher.clone()));
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        registry.clone(),
        message_pusher.clone(),
        clock,
    ));
    let disconnect_usecase = Arc::new(DisconnectUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let list_rooms_usecase = Arc::new(ListRoomsUseCase::new(registry.clone()));

    let server = Server::new(
        connect_usecase,
        join_room_usecase,
        send_message_usecase,
        disconnect_usecase,
        list_rooms_usecase,
        args.public_dir,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
