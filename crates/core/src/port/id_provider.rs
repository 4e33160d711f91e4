// ID Provider Port (for deterministic testing)

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Length of generated queue ids (62^8 possible tokens)
pub const QUEUE_ID_LEN: usize = 8;

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a short id for a new queue
    fn generate_queue_id(&self) -> String;

    /// Generate a unique id for a person joining a queue
    fn generate_person_id(&self) -> String;
}

/// Random token / UUID v4 provider (production)
pub struct RandomIdProvider;

impl IdProvider for RandomIdProvider {
    fn generate_queue_id(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(QUEUE_ID_LEN)
            .map(char::from)
            .collect()
    }

    fn generate_person_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Counter-based provider for tests: `q-1`, `q-2`, ... and `p-1`, `p-2`, ...
#[derive(Default)]
pub struct SequentialIdProvider {
    queues: AtomicU64,
    people: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIdProvider {
    fn generate_queue_id(&self) -> String {
        format!("q-{}", self.queues.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn generate_person_id(&self) -> String {
        format!("p-{}", self.people.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_queue_id_shape() {
        let id = RandomIdProvider.generate_queue_id();
        assert_eq!(id.len(), QUEUE_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_queue_ids_do_not_repeat() {
        let ids: HashSet<_> = (0..1000)
            .map(|_| RandomIdProvider.generate_queue_id())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_random_person_id_is_uuid() {
        let id = RandomIdProvider.generate_person_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdProvider::new();
        assert_eq!(ids.generate_queue_id(), "q-1");
        assert_eq!(ids.generate_queue_id(), "q-2");
        assert_eq!(ids.generate_person_id(), "p-1");
    }
}
