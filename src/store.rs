//! Store - per-request render state keyed by component tag name
//!
//! One fresh Store per render invocation (request isolation on a shared
//! server process). Writes go through an explicit `set` operation; the
//! snapshot taken after the prefetch merge is what the context carries
//! out for hydration.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use serde_json::Value;

/// Concurrent tag-name → data container for one render cycle
///
/// Clones share the same underlying map, so the application root and the
/// bootstrap can hold the same store. Uses Arc<str> keys for zero-cost
/// cloning.
#[derive(Clone, Default)]
pub struct Store {
    state: Arc<DashMap<Arc<str>, Value>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write prefetched data under a tag name (last write wins)
    pub fn set(&self, tag_name: impl Into<Arc<str>>, data: Value) {
        self.state.insert(tag_name.into(), data);
    }

    /// Read back the data stored under a tag name
    pub fn get(&self, tag_name: &str) -> Option<Value> {
        self.state.get(tag_name).map(|v| v.value().clone())
    }

    /// Check if a tag name has data
    pub fn contains(&self, tag_name: &str) -> bool {
        self.state.contains_key(tag_name)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Ordered copy of the full state
    ///
    /// Taken once per render, after the prefetch merge. The ordering
    /// gives the serialized form a stable shape.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            entries: self
                .state
                .iter()
                .map(|e| (e.key().to_string(), e.value().clone()))
                .collect(),
        }
    }
}

/// Serializable, ordered view of the store state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    entries: BTreeMap<String, Value>,
}

impl StateSnapshot {
    /// Data for a tag name, if present
    pub fn get(&self, tag_name: &str) -> Option<&Value> {
        self.entries.get(tag_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in tag-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
