// Remove Person Use Case

use super::join::required;
use crate::error::Result;
use crate::port::QueueRepository;
use serde::Deserialize;
use tracing::{debug, info};

/// Remove request (both ids required)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovePersonRequest {
    #[serde(default)]
    pub queue_id: Option<String>,
    #[serde(default)]
    pub person_id: Option<String>,
}

/// Execute remove use case
///
/// Removing someone who is not in the line is a success; only a missing
/// queue fails.
pub async fn execute(queue_repo: &dyn QueueRepository, req: RemovePersonRequest) -> Result<()> {
    let queue_id = required(req.queue_id, "queueId")?;
    let person_id = required(req.person_id, "personId")?;

    let removed = queue_repo.remove_person(&queue_id, &person_id).await?;
    if removed == 0 {
        debug!(
            queue_id = %queue_id,
            person_id = %person_id,
            "Person not in queue, nothing removed"
        );
    } else {
        info!(queue_id = %queue_id, person_id = %person_id, "Person removed from queue");
    }

    Ok(())
}
