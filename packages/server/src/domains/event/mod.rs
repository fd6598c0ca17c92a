//! Event domain - scheduled club events, each belonging to an event type

pub mod actions;
pub mod data;
pub mod models;

pub use data::{EventData, EventWithTypeData};
pub use models::event::Event;
