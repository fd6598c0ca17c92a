// Club Management Server - API Core
//
// This crate provides the REST backend for a small club-management
// application: event types, events, members, and the two many-to-many
// relations linking them (preferences and registrations).

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
