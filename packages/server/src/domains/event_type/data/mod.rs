pub mod event_type;

pub use event_type::EventTypeData;
