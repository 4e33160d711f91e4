// Join Queue Use Case

use crate::domain::{Person, QueueId};
use crate::error::{AppError, Result};
use crate::port::{IdProvider, QueueRepository, TimeProvider};
use serde::Deserialize;

/// Join request. `queue_id` and `name` are required but arrive as options
/// so a missing field becomes a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinQueueRequest {
    #[serde(default)]
    pub queue_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
}

/// Validated join fields
#[derive(Debug, PartialEq, Eq)]
pub struct ValidJoin {
    pub queue_id: QueueId,
    pub name: String,
    pub contact_info: Option<String>,
}

/// Check required fields before touching the registry
pub fn validate_request(req: JoinQueueRequest) -> Result<ValidJoin> {
    Ok(ValidJoin {
        queue_id: required(req.queue_id, "queueId")?,
        name: required(req.name, "name")?,
        contact_info: req.contact_info,
    })
}

pub(crate) fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Execute join use case
pub async fn execute(
    queue_repo: &dyn QueueRepository,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    req: JoinQueueRequest,
) -> Result<Person> {
    let valid = validate_request(req)?;

    let person = Person::new(
        id_provider.generate_person_id(),
        valid.name,
        time_provider.now(),
        valid.contact_info,
    );

    queue_repo
        .append_person(&valid.queue_id, person.clone())
        .await?;

    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(queue_id: Option<&str>, name: Option<&str>) -> JoinQueueRequest {
        JoinQueueRequest {
            queue_id: queue_id.map(String::from),
            name: name.map(String::from),
            contact_info: None,
        }
    }

    #[test]
    fn test_validate_missing_name() {
        let result = validate_request(req(Some("q1"), None));
        assert!(result.unwrap_err().to_string().contains("name is required"));
    }

    #[test]
    fn test_validate_blank_name() {
        let result = validate_request(req(Some("q1"), Some("   ")));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_missing_queue_id() {
        let result = validate_request(req(None, Some("Alice")));
        assert!(result.unwrap_err().to_string().contains("queueId is required"));
    }

    #[test]
    fn test_validate_valid_request() {
        let valid = validate_request(JoinQueueRequest {
            queue_id: Some("q1".to_string()),
            name: Some("Alice".to_string()),
            contact_info: Some("555-0100".to_string()),
        })
        .unwrap();

        assert_eq!(valid.queue_id, "q1");
        assert_eq!(valid.name, "Alice");
        assert_eq!(valid.contact_info.as_deref(), Some("555-0100"));
    }
}
