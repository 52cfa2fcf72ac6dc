//! Component registry - the statically known set of mounted components
//!
//! Insertion-ordered key → component mapping. Enumeration order is
//! registration order, and that order is the launch order of prefetch
//! hooks during bootstrap.

use std::sync::Arc;

use crate::component::{Component, PrefetchData};

/// Registry of components attached to the application root
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    entries: Vec<(Arc<str>, Arc<dyn Component>)>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under `key`.
    ///
    /// Re-registering an existing key replaces the component in place;
    /// the key keeps its original enumeration position.
    pub fn register(&mut self, key: impl Into<Arc<str>>, component: Arc<dyn Component>) {
        let key = key.into();
        if let Some(pos) = self.entries.iter().position(|(k, _)| k.as_ref() == key.as_ref()) {
            self.entries[pos].1 = component;
        } else {
            self.entries.push((key, component));
        }
    }

    /// Builder-style registration
    pub fn with(mut self, key: impl Into<Arc<str>>, component: Arc<dyn Component>) -> Self {
        self.register(key, component);
        self
    }

    /// Look up a component by its registry key
    pub fn get(&self, key: &str) -> Option<&Arc<dyn Component>> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, c)| c)
    }

    /// All components in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Component>)> {
        self.entries.iter().map(|(k, c)| (k.as_ref(), c))
    }

    /// Components exposing the prefetch capability, in registration order
    pub fn prefetchable(&self) -> impl Iterator<Item = (&str, &dyn PrefetchData)> {
        self.entries
            .iter()
            .filter_map(|(k, c)| c.prefetch().map(|hook| (k.as_ref(), hook)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
