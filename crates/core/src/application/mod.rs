// Application Layer - Use Cases and Business Logic

pub mod queue;

// Re-exports
pub use queue::{CreateQueueRequest, JoinQueueRequest, QueueService, RemovePersonRequest};
