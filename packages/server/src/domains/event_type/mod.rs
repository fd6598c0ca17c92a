//! Event type domain - the catalog of event categories

pub mod actions;
pub mod data;
pub mod models;

pub use data::EventTypeData;
pub use models::event_type::EventType;
