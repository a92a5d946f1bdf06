//! Room-scoped WebSocket chat relay.
//!
//! Clients connect over WebSocket, land in the `"public"` room, and can
//! join any named room, exchange sanitized rich-text messages, and watch
//! live presence counts. The room registry is the single source of truth
//! for membership; everything else fans out from it.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// collaborators
pub mod sanitizer;
