pub mod event_type;
