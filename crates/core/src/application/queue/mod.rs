// Queue Service - Core use cases for the queue registry

pub mod create;
pub mod join;
pub mod remove;

pub use create::CreateQueueRequest;
pub use join::JoinQueueRequest;
pub use remove::RemovePersonRequest;

use crate::domain::{Person, Queue, QueueId};
use crate::error::{AppError, Result};
use crate::port::{IdProvider, QueueRepository, RegistryStats, TimeProvider};
use std::sync::Arc;
use tracing::{debug, info};

/// Queue Service
///
/// Owns no state itself: the registry lives behind `QueueRepository`, so each
/// service instance (and each test) works against the store it was built with.
pub struct QueueService {
    queue_repo: Arc<dyn QueueRepository>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueService {
    pub fn new(
        queue_repo: Arc<dyn QueueRepository>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            queue_repo,
            id_provider,
            time_provider,
        }
    }

    /// Create a new, active, empty queue
    pub async fn create(&self, req: CreateQueueRequest) -> Result<Queue> {
        let queue = create::execute(
            self.queue_repo.as_ref(),
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            req,
        )
        .await?;

        info!(queue_id = %queue.id, name = %queue.name, "Queue created");
        Ok(queue)
    }

    /// Append a person to an active queue
    pub async fn join(&self, req: JoinQueueRequest) -> Result<Person> {
        let queue_id = req.queue_id.clone().unwrap_or_default();

        match join::execute(
            self.queue_repo.as_ref(),
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            req,
        )
        .await
        {
            Ok(person) => {
                info!(queue_id = %queue_id, person_id = %person.id, "Person joined queue");
                Ok(person)
            }
            Err(e) => {
                debug!(queue_id = %queue_id, error = %e, "Join rejected");
                Err(e)
            }
        }
    }

    /// Full current record, active or not
    pub async fn get(&self, queue_id: &QueueId) -> Result<Queue> {
        self.queue_repo
            .find_by_id(queue_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Queue {} not found", queue_id)))
    }

    /// Head of the line without removing it
    ///
    /// A missing queue and an empty queue both come back as `NotFound`.
    pub async fn peek_next(&self, queue_id: &QueueId) -> Result<Person> {
        self.queue_repo
            .peek_next(queue_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Queue {} is empty", queue_id)))
    }

    /// Remove a person from a queue (absent person is not an error)
    pub async fn remove_person(&self, req: RemovePersonRequest) -> Result<()> {
        remove::execute(self.queue_repo.as_ref(), req).await
    }

    /// Stop a queue from accepting joins (idempotent)
    pub async fn deactivate(&self, queue_id: &QueueId) -> Result<()> {
        let was_active = self.queue_repo.deactivate(queue_id).await?;
        if was_active {
            info!(queue_id = %queue_id, "Queue deactivated");
        } else {
            debug!(queue_id = %queue_id, "Queue already inactive");
        }
        Ok(())
    }

    /// Registry-wide counters
    pub async fn stats(&self) -> Result<RegistryStats> {
        self.queue_repo.stats().await
    }
}
