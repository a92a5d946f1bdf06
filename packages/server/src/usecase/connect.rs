//! UseCase: connection open.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel, Session};

/// Creates the per-connection session and registers its outbound channel.
pub struct ConnectUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// Open a session for a new connection.
    ///
    /// Generates the connection id, registers the outbound channel with the
    /// pusher, and returns the unbound session. Never fails: a connection
    /// is always accepted.
    pub async fn execute(&self, sender: PusherChannel) -> Session {
        let connection_id = ConnectionId::generate();
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        let session = Session::new(connection_id);
        tracing::info!(
            "connection '{}' opened as '{}'",
            session.connection_id(),
            session.display_name()
        );
        session
    }
}
