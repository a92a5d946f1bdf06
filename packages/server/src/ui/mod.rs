//! UI layer: axum router, handlers, and server execution.

pub mod handler;
mod server;
mod signal;
mod state;

pub use server::{Server, app};
pub use state::AppState;
