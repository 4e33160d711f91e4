// In-Memory QueueRepository Implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::trace;
use waitline_core::domain::{Person, Queue, QueueId};
use waitline_core::error::{AppError, Result};
use waitline_core::port::{QueueRepository, RegistryStats};

type QueueSlot = Arc<RwLock<Queue>>;

/// Registry of queues held in process memory.
///
/// The outer lock guards only the id -> slot map. Each queue has its own lock,
/// so writes to one queue never wait on another.
#[derive(Default)]
pub struct InMemoryQueueRepository {
    queues: RwLock<HashMap<QueueId, QueueSlot>>,
}

impl InMemoryQueueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, queue_id: &QueueId) -> Result<QueueSlot> {
        self.queues
            .read()
            .await
            .get(queue_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Queue {} not found", queue_id)))
    }
}

#[async_trait]
impl QueueRepository for InMemoryQueueRepository {
    async fn insert(&self, queue: Queue) -> Result<()> {
        let mut queues = self.queues.write().await;
        if queues.contains_key(&queue.id) {
            return Err(AppError::Conflict(format!(
                "Queue {} already exists",
                queue.id
            )));
        }
        trace!(queue_id = %queue.id, "Inserting queue");
        queues.insert(queue.id.clone(), Arc::new(RwLock::new(queue)));
        Ok(())
    }

    async fn find_by_id(&self, id: &QueueId) -> Result<Option<Queue>> {
        let slot = match self.queues.read().await.get(id) {
            Some(slot) => slot.clone(),
            None => return Ok(None),
        };
        let queue = slot.read().await.clone();
        Ok(Some(queue))
    }

    async fn append_person(&self, queue_id: &QueueId, person: Person) -> Result<()> {
        let slot = self.slot(queue_id).await?;
        let mut queue = slot.write().await;
        queue.join(person)?;
        Ok(())
    }

    async fn peek_next(&self, queue_id: &QueueId) -> Result<Option<Person>> {
        let slot = self.slot(queue_id).await?;
        let queue = slot.read().await;
        Ok(queue.next_in_line().cloned())
    }

    async fn remove_person(&self, queue_id: &QueueId, person_id: &str) -> Result<usize> {
        let slot = self.slot(queue_id).await?;
        let mut queue = slot.write().await;
        Ok(queue.remove_person(person_id))
    }

    async fn deactivate(&self, queue_id: &QueueId) -> Result<bool> {
        let slot = self.slot(queue_id).await?;
        let mut queue = slot.write().await;
        Ok(queue.deactivate())
    }

    async fn stats(&self) -> Result<RegistryStats> {
        let slots: Vec<QueueSlot> = self.queues.read().await.values().cloned().collect();

        let mut stats = RegistryStats {
            total_queues: slots.len(),
            ..Default::default()
        };
        for slot in slots {
            let queue = slot.read().await;
            if queue.is_active {
                stats.active_queues += 1;
            }
            stats.waiting_people += queue.waiting();
        }
        Ok(stats)
    }
}
