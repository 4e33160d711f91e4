// Waitline Infrastructure - In-Memory Adapter
// Implements: QueueRepository (process-lifetime registry, no persistence)

mod queue_repository;

pub use queue_repository::InMemoryQueueRepository;
