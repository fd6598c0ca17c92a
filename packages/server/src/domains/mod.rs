// Business domains
pub mod event;
pub mod event_type;
pub mod member;
