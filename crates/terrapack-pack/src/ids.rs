//! Pack identifier generation.
//!
//! Manifest header and module identifiers must be globally unique per build,
//! so the default source draws fresh v4 UUIDs. Reproducible builds and tests
//! inject [`PinnedIds`] instead of relying on hardcoded identifiers.

use uuid::Uuid;

/// A source of pack identifiers.
///
/// A build consumes identifiers in a fixed order (header first, then one per
/// module), so a pinned source can reproduce a manifest exactly.
pub trait IdSource {
    /// Produce the next identifier.
    fn next_id(&mut self) -> String;
}

/// Fresh random v4 UUIDs, the default for normal builds.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// A fixed identifier sequence for reproducible builds.
///
/// Cycles when exhausted, so it is total for any number of requests; supply
/// as many identifiers as one build consumes (two) for exact reproduction.
#[derive(Debug, Clone)]
pub struct PinnedIds {
    ids: Vec<String>,
    cursor: usize,
}

impl PinnedIds {
    /// Create a pinned source from a non-empty identifier list.
    pub fn new(ids: Vec<String>) -> Self {
        assert!(!ids.is_empty(), "PinnedIds requires at least one identifier");
        Self { ids, cursor: 0 }
    }
}

impl IdSource for PinnedIds {
    fn next_id(&mut self) -> String {
        let id = self.ids[self.cursor % self.ids.len()].clone();
        self.cursor += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_are_unique() {
        let mut source = RandomIds;
        let a = source.next_id();
        let b = source.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_ids_are_parseable_uuids() {
        let mut source = RandomIds;
        let id = source.next_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_pinned_ids_replay_in_order() {
        let mut source = PinnedIds::new(vec!["one".into(), "two".into()]);
        assert_eq!(source.next_id(), "one");
        assert_eq!(source.next_id(), "two");
        // Cycles when exhausted
        assert_eq!(source.next_id(), "one");
    }
}
