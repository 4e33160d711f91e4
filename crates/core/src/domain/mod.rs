// Domain Layer - Pure business logic and entities

pub mod error;
pub mod person;
pub mod queue;

// Re-exports
pub use error::DomainError;
pub use person::{Person, PersonId};
pub use queue::{Queue, QueueDraft, QueueId, DEFAULT_QUEUE_NAME, DEFAULT_TIME_PER_PERSON};
