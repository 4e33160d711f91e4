// Create Queue Use Case

use crate::domain::{Queue, QueueDraft};
use crate::error::{AppError, Result};
use crate::port::{IdProvider, QueueRepository, TimeProvider};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use tracing::warn;

/// Attempts at drawing a fresh queue id before giving up
pub const MAX_ID_ATTEMPTS: usize = 3;

/// Create request. Every field is optional, and each one is read on its own:
/// a field of the wrong type becomes `None` and falls back to its default
/// without discarding its neighbours.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQueueRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_per_person: Option<Number>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl From<CreateQueueRequest> for QueueDraft {
    fn from(req: CreateQueueRequest) -> Self {
        QueueDraft {
            name: req.name,
            description: req.description,
            location: req.location,
            time_per_person: req.time_per_person,
        }
    }
}

/// Execute create use case
///
/// # Arguments
///
/// * `queue_repo` - Queue registry
/// * `id_provider` - ID generator (injected for determinism)
/// * `time_provider` - Time provider (injected for determinism)
/// * `req` - Create request
pub async fn execute(
    queue_repo: &dyn QueueRepository,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    req: CreateQueueRequest,
) -> Result<Queue> {
    let draft = QueueDraft::from(req);
    let created_at = time_provider.now();

    for attempt in 1..=MAX_ID_ATTEMPTS {
        let queue = Queue::new(id_provider.generate_queue_id(), created_at, draft.clone());

        match queue_repo.insert(queue.clone()).await {
            Ok(()) => return Ok(queue),
            Err(AppError::Conflict(msg)) => {
                warn!(queue_id = %queue.id, attempt, "Queue id collision, regenerating");
                if attempt == MAX_ID_ATTEMPTS {
                    return Err(AppError::Conflict(msg));
                }
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::Conflict("Could not allocate a queue id".to_string()))
}
