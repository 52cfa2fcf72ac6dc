//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Errors surfaced by the render bootstrap
#[derive(Error, Debug)]
pub enum RenderError {
    /// A component's prefetch hook failed. The bootstrap aborts on the
    /// first failure; no partial state reaches the context.
    #[error("Prefetch failed: {0}")]
    Prefetch(String),

    #[error("State serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The supplied context already carries a state snapshot. A context
    /// is good for exactly one render.
    #[error("Render context already carries a state snapshot")]
    StateAlreadyAttached,
}

impl FixSuggestion for RenderError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            RenderError::Prefetch(_) => {
                Some("Check the failing component's data source (API reachable, fixture present)")
            }
            RenderError::Serialize(_) => {
                Some("Ensure prefetched payloads contain only JSON-serializable data")
            }
            RenderError::StateAlreadyAttached => {
                Some("Create a fresh RenderContext for every incoming request")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefetch_error_carries_hook_message() {
        let err = RenderError::Prefetch("user-profile: connection refused".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Prefetch failed"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn every_variant_has_a_suggestion() {
        let prefetch = RenderError::Prefetch("boom".to_string());
        assert!(prefetch.fix_suggestion().is_some());

        let attached = RenderError::StateAlreadyAttached;
        assert!(attached.fix_suggestion().unwrap().contains("fresh RenderContext"));
    }

    #[test]
    fn serialize_error_converts_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = RenderError::from(json_err);
        assert!(matches!(err, RenderError::Serialize(_)));
    }
}
