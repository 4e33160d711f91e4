// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Queue {0} is no longer accepting people")]
    QueueInactive(String),

    #[error("Person {0} is already in the queue")]
    DuplicatePerson(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
