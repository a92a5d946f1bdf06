//! Shared utilities for the Parlor chat relay.

pub mod logger;
pub mod time;
