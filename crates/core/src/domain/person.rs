// Person Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Person identifier (UUID v4)
pub type PersonId = String;

/// A registrant holding a position in a queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub contact_info: String,
}

impl Person {
    pub fn new(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        joined_at: DateTime<Utc>,
        contact_info: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            joined_at,
            contact_info: contact_info.unwrap_or_default(),
        }
    }
}
