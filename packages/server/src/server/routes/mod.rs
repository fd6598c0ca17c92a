// HTTP routes
pub mod event_types;
pub mod events;
pub mod health;
pub mod members;
