// Queue Domain Model

use super::error::{DomainError, Result};
use super::person::Person;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Queue identifier (short random token)
pub type QueueId = String;

/// Name used when a queue is created without one
pub const DEFAULT_QUEUE_NAME: &str = "Untitled";

/// Minutes per person used when a queue is created without an estimate
pub const DEFAULT_TIME_PER_PERSON: u32 = 5;

/// Caller-supplied queue fields; anything omitted falls back to a default
#[derive(Debug, Clone, Default)]
pub struct QueueDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub time_per_person: Option<Number>,
}

/// Queue Entity
///
/// `people` is kept in arrival order: index 0 is the head of the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    pub id: QueueId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub time_per_person: Number,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub people: Vec<Person>,
}

impl Queue {
    /// Create a new active, empty queue
    pub fn new(id: impl Into<QueueId>, created_at: DateTime<Utc>, draft: QueueDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name.unwrap_or_else(|| DEFAULT_QUEUE_NAME.to_string()),
            description: draft.description.unwrap_or_default(),
            location: draft.location.unwrap_or_default(),
            time_per_person: draft
                .time_per_person
                .unwrap_or_else(|| Number::from(DEFAULT_TIME_PER_PERSON)),
            created_at,
            is_active: true,
            people: Vec::new(),
        }
    }

    /// Append a person to the tail of the line
    ///
    /// Fails once the queue has been deactivated, and on a repeated person id.
    pub fn join(&mut self, person: Person) -> Result<()> {
        if !self.is_active {
            return Err(DomainError::QueueInactive(self.id.clone()));
        }
        if self.people.iter().any(|p| p.id == person.id) {
            return Err(DomainError::DuplicatePerson(person.id));
        }
        self.people.push(person);
        Ok(())
    }

    /// Head of the line, if anyone is waiting
    pub fn next_in_line(&self) -> Option<&Person> {
        self.people.first()
    }

    /// Remove every entry with `person_id`, keeping the others in order.
    /// Returns how many entries were removed (0 is not an error).
    pub fn remove_person(&mut self, person_id: &str) -> usize {
        let before = self.people.len();
        self.people.retain(|p| p.id != person_id);
        before - self.people.len()
    }

    /// Stop accepting joins. One-way; returns whether the queue was active.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.is_active, false)
    }

    pub fn waiting(&self) -> usize {
        self.people.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn person(id: &str, name: &str) -> Person {
        Person::new(id, name, ts(100), None)
    }

    #[test]
    fn test_new_queue_applies_defaults() {
        let queue = Queue::new("q1", ts(0), QueueDraft::default());

        assert_eq!(queue.name, "Untitled");
        assert_eq!(queue.description, "");
        assert_eq!(queue.location, "");
        assert_eq!(queue.time_per_person, Number::from(5));
        assert!(queue.is_active);
        assert!(queue.people.is_empty());
    }

    #[test]
    fn test_new_queue_keeps_supplied_fields() {
        let draft = QueueDraft {
            name: Some("Clinic".to_string()),
            description: Some("Walk-ins".to_string()),
            location: Some("Room 4".to_string()),
            time_per_person: Number::from_f64(2.5),
        };
        let queue = Queue::new("q1", ts(0), draft);

        assert_eq!(queue.name, "Clinic");
        assert_eq!(queue.description, "Walk-ins");
        assert_eq!(queue.location, "Room 4");
        assert_eq!(queue.time_per_person.as_f64(), Some(2.5));
    }

    #[test]
    fn test_join_preserves_arrival_order() {
        let mut queue = Queue::new("q1", ts(0), QueueDraft::default());
        queue.join(person("p1", "Alice")).unwrap();
        queue.join(person("p2", "Bob")).unwrap();
        queue.join(person("p3", "Carol")).unwrap();

        let names: Vec<_> = queue.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(queue.next_in_line().unwrap().name, "Alice");
    }

    #[test]
    fn test_join_rejected_after_deactivate() {
        let mut queue = Queue::new("q1", ts(0), QueueDraft::default());
        queue.join(person("p1", "Alice")).unwrap();
        queue.deactivate();

        let err = queue.join(person("p2", "Bob")).unwrap_err();
        assert_eq!(err, DomainError::QueueInactive("q1".to_string()));
        assert_eq!(queue.waiting(), 1);
    }

    #[test]
    fn test_join_rejects_duplicate_person_id() {
        let mut queue = Queue::new("q1", ts(0), QueueDraft::default());
        queue.join(person("p1", "Alice")).unwrap();

        assert!(matches!(
            queue.join(person("p1", "Alice again")),
            Err(DomainError::DuplicatePerson(_))
        ));
        assert_eq!(queue.waiting(), 1);
    }

    #[test]
    fn test_remove_person_keeps_relative_order() {
        let mut queue = Queue::new("q1", ts(0), QueueDraft::default());
        queue.join(person("p1", "Alice")).unwrap();
        queue.join(person("p2", "Bob")).unwrap();
        queue.join(person("p3", "Carol")).unwrap();

        assert_eq!(queue.remove_person("p2"), 1);
        let ids: Vec<_> = queue.people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);

        // Missing person is a no-op
        assert_eq!(queue.remove_person("nobody"), 0);
        assert_eq!(queue.waiting(), 2);
    }

    #[test]
    fn test_deactivate_is_one_way_and_idempotent() {
        let mut queue = Queue::new("q1", ts(0), QueueDraft::default());

        assert!(queue.deactivate());
        assert!(!queue.deactivate());
        assert!(!queue.is_active);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut queue = Queue::new("q1", ts(0), QueueDraft::default());
        queue.join(person("p1", "Alice")).unwrap();

        let json = serde_json::to_value(&queue).unwrap();
        assert_eq!(json["timePerPerson"], 5);
        assert_eq!(json["isActive"], true);
        assert!(json["createdAt"].is_string());
        assert_eq!(json["people"][0]["contactInfo"], "");
        assert!(json["people"][0]["joinedAt"].is_string());
    }
}
