//! Infrastructure layer: concrete implementations of the domain traits
//! plus the wire-format DTOs.

pub mod dto;
pub mod pusher;
pub mod registry;
