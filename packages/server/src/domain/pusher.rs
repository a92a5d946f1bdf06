//! Message pusher trait definition.
//!
//! Abstracts outbound delivery so the usecase layer does not depend on the
//! WebSocket plumbing.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::ConnectionId;

/// Channel the pusher writes serialized events into; the connection's
/// writer task drains it onto the wire.
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[derive(Debug, Error, PartialEq)]
pub enum MessagePushError {
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),
    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// Outbound delivery to connected clients.
///
/// Delivery is fire-and-forget: `broadcast` tolerates individual targets
/// that are gone or failing and never reports them as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a connection's outbound channel.
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Drop a connection's outbound channel.
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// Push a message to a single client.
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// Push a message to every target that is still registered.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
