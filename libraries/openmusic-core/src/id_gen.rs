//! Id generation strategies
//!
//! Ids are generated client-side, before the insert, so the strategy is a
//! collaborator handed to every service rather than a database default.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Length of the random suffix appended to the tag
const SUFFIX_LEN: usize = 16;

/// Produces fresh opaque ids for a resource-type tag
pub trait IdGenerator: Send + Sync {
    /// Return a new id of the form `<tag>-<suffix>`
    fn next_id(&self, tag: &str) -> String;
}

/// Random ids backed by uuid v4
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self, tag: &str) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{tag}-{}", &suffix[..SUFFIX_LEN])
    }
}

/// Predictable ids for tests. Each tag counts from 1 on its own, so
/// `album-1`, `song-1`, `album-2`.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counters: Mutex<HashMap<String, u64>>,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, tag: &str) -> String {
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let n = counters.entry(tag.to_string()).or_insert(0);
        *n += 1;
        format!("{tag}-{n}")
    }
}
