//! Component abstraction and the prefetch capability
//!
//! Components opt into pre-render data loading by returning a
//! [`PrefetchData`] implementation from [`Component::prefetch`]. The
//! capability is an explicit trait, not a runtime field probe: the
//! registry enumerates "every component implementing prefetch" and
//! nothing else.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Data produced by a component's prefetch hook
///
/// Ephemeral: lives between the fan-in and the store merge. The
/// `tag_name` decides where the payload lands in the store; the hook
/// owns that choice, not the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefetchResult {
    /// Tag name under which the data is stored
    pub tag_name: String,
    /// Arbitrary JSON payload
    pub data: Value,
}

impl PrefetchResult {
    pub fn new(tag_name: impl Into<String>, data: Value) -> Self {
        Self {
            tag_name: tag_name.into(),
            data,
        }
    }
}

/// Optional pre-render data loading capability
///
/// Hooks run concurrently with every other hook of the same render;
/// they must not assume any completion order. Errors are opaque and
/// abort the whole bootstrap (fail-fast, no partial state).
#[async_trait]
pub trait PrefetchData: Send + Sync {
    /// Fetch the data this component needs before first render.
    ///
    /// `key` is the component's registry key, passed through so shared
    /// hook implementations can tell their mount points apart.
    async fn prefetch_data(&self, key: &str) -> Result<PrefetchResult>;
}

/// A component mounted on the application root
pub trait Component: Send + Sync {
    /// The prefetch capability, if this component has one
    fn prefetch(&self) -> Option<&dyn PrefetchData> {
        None
    }
}

// ============================================================================
// MOCK COMPONENT
// ============================================================================

/// Configurable component for tests: fixed payload, failure simulation,
/// optional resolve delay. No real data source is touched.
pub struct MockComponent {
    /// Tag name to report; None means echo the registry key
    tag_name: Option<String>,
    data: Value,
    delay: Option<Duration>,
    fail_with: Option<String>,
    /// When true the component exposes no prefetch capability at all
    inert: bool,
}

impl MockComponent {
    /// Component whose hook resolves with the given tag name and payload
    pub fn returning(tag_name: impl Into<String>, data: Value) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            data,
            delay: None,
            fail_with: None,
            inert: false,
        }
    }

    /// Component whose hook uses its registry key as the tag name
    pub fn keyed(data: Value) -> Self {
        Self {
            tag_name: None,
            data,
            delay: None,
            fail_with: None,
            inert: false,
        }
    }

    /// Component whose hook rejects with the given error message
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            tag_name: None,
            data: Value::Null,
            delay: None,
            fail_with: Some(error.into()),
            inert: false,
        }
    }

    /// Component without any prefetch capability
    pub fn inert() -> Self {
        Self {
            tag_name: None,
            data: Value::Null,
            delay: None,
            fail_with: None,
            inert: true,
        }
    }

    /// Delay the hook's resolution (for completion-order tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl Component for MockComponent {
    fn prefetch(&self) -> Option<&dyn PrefetchData> {
        if self.inert {
            None
        } else {
            Some(self)
        }
    }
}

#[async_trait]
impl PrefetchData for MockComponent {
    async fn prefetch_data(&self, key: &str) -> Result<PrefetchResult> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = &self.fail_with {
            anyhow::bail!("{key}: {error}");
        }
        let tag_name = self.tag_name.clone().unwrap_or_else(|| key.to_string());
        Ok(PrefetchResult::new(tag_name, self.data.clone()))
    }
}
