pub mod event;

pub use event::{EventData, EventWithTypeData};
