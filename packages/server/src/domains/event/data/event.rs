use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domains::event::models::event::{Event, EventWithType};

/// Raw event row (single-event responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub id: i64,
    pub type_id: i64,
    pub description: String,
    pub date: NaiveDate,
}

impl From<Event> for EventData {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            type_id: event.type_id,
            description: event.description,
            date: event.date,
        }
    }
}

/// Event joined with its type description (list responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithTypeData {
    pub id: i64,
    pub type_name: String,
    pub description: String,
    pub date: NaiveDate,
}

impl From<EventWithType> for EventWithTypeData {
    fn from(event: EventWithType) -> Self {
        Self {
            id: event.id,
            type_name: event.type_name,
            description: event.description,
            date: event.date,
        }
    }
}
