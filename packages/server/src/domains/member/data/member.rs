use serde::{Deserialize, Serialize};

use crate::domains::member::models::member::Member;

/// Member aggregate: the member row enriched with its preference and
/// registration id sets (joined from the two association tables)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberData {
    pub id: i64,
    pub name: String,
    pub preferred_event_type_ids: Vec<i64>,
    pub event_ids: Vec<i64>,
}

impl MemberData {
    pub fn new(member: Member, preferred_event_type_ids: Vec<i64>, event_ids: Vec<i64>) -> Self {
        Self {
            id: member.id,
            name: member.name,
            preferred_event_type_ids,
            event_ids,
        }
    }
}
