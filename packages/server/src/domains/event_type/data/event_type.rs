use serde::{Deserialize, Serialize};

use crate::domains::event_type::models::event_type::EventType;

/// Public API representation of an event type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTypeData {
    pub id: i64,
    pub description: String,
}

impl From<EventType> for EventTypeData {
    fn from(event_type: EventType) -> Self {
        Self {
            id: event_type.id,
            description: event_type.description,
        }
    }
}
