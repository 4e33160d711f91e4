// Queue Repository Port (Interface)

use crate::domain::{Person, Queue, QueueId};
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Point-in-time counters over the whole registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub total_queues: usize,
    pub active_queues: usize,
    pub waiting_people: usize,
}

/// Registry interface for Queue storage
///
/// Every mutating method runs as one critical section on the target queue:
/// the existence check, the state check and the write cannot interleave with
/// another write to the same queue.
#[async_trait]
pub trait QueueRepository: Send + Sync {
    /// Insert a new queue (`Conflict` if the id is already taken)
    async fn insert(&self, queue: Queue) -> Result<()>;

    /// Snapshot of a queue by ID
    async fn find_by_id(&self, id: &QueueId) -> Result<Option<Queue>>;

    /// Append a person to the tail (`NotFound` or `InactiveQueue`)
    async fn append_person(&self, queue_id: &QueueId, person: Person) -> Result<()>;

    /// Head of the line without removing it (`NotFound` if the queue is absent)
    async fn peek_next(&self, queue_id: &QueueId) -> Result<Option<Person>>;

    /// Remove all entries for `person_id`, returning how many were removed
    async fn remove_person(&self, queue_id: &QueueId, person_id: &str) -> Result<usize>;

    /// Mark the queue inactive, returning whether it was active before
    async fn deactivate(&self, queue_id: &QueueId) -> Result<bool>;

    /// Registry-wide counters
    async fn stats(&self) -> Result<RegistryStats>;
}
