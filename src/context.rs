//! RenderContext - per-request carrier for the hydrated state
//!
//! Owned by the caller, mutated exactly once by a successful bootstrap.
//! After the render it hands the state snapshot to the serialization
//! step as JSON or as a ready-made hydration script tag.

use crate::error::RenderError;
use crate::store::StateSnapshot;

/// Per-request carrier object
#[derive(Debug, Default, Clone)]
pub struct RenderContext {
    /// Request URL, carried for diagnostics only
    url: Option<String>,
    /// Aggregated prefetch state; set once per successful bootstrap,
    /// never set on failure
    state: Option<StateSnapshot>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context tagged with the request URL it serves
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            state: None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The attached state snapshot, if the bootstrap has run
    pub fn state(&self) -> Option<&StateSnapshot> {
        self.state.as_ref()
    }

    /// Attach the final state snapshot. A context carries at most one;
    /// reusing a context across renders is an error.
    pub fn attach_state(&mut self, snapshot: StateSnapshot) -> Result<(), RenderError> {
        if self.state.is_some() {
            return Err(RenderError::StateAlreadyAttached);
        }
        self.state = Some(snapshot);
        Ok(())
    }

    /// Compact JSON of the attached state, for embedding in the page
    pub fn state_json(&self) -> Result<Option<String>, RenderError> {
        self.state
            .as_ref()
            .map(|s| serde_json::to_string(s).map_err(RenderError::from))
            .transpose()
    }

    /// `window.__INITIAL_STATE__` script tag for client hydration
    ///
    /// `<` is escaped so payload content cannot break out of the tag.
    pub fn state_script(&self) -> Result<Option<String>, RenderError> {
        Ok(self.state_json()?.map(|json| {
            let escaped = json.replace('<', "\\u003c");
            format!("<script>window.__INITIAL_STATE__={escaped};</script>")
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use serde_json::json;

    #[test]
    fn new_context_has_no_state() {
        let ctx = RenderContext::new();
        assert!(ctx.state().is_none());
        assert!(ctx.url().is_none());
        assert_eq!(ctx.state_json().unwrap(), None);
    }

    #[test]
    fn for_url_carries_the_request_url() {
        let ctx = RenderContext::for_url("/articles/42");
        assert_eq!(ctx.url(), Some("/articles/42"));
    }

    #[test]
    fn attach_state_is_one_shot() {
        let store = Store::new();
        store.set("feed", json!([1, 2]));

        let mut ctx = RenderContext::new();
        ctx.attach_state(store.snapshot()).unwrap();
        assert_eq!(ctx.state().unwrap().get("feed"), Some(&json!([1, 2])));

        let second = ctx.attach_state(store.snapshot());
        assert!(matches!(second, Err(RenderError::StateAlreadyAttached)));
    }

    #[test]
    fn state_json_is_compact() {
        let store = Store::new();
        store.set("counter", json!({"value": 3}));

        let mut ctx = RenderContext::new();
        ctx.attach_state(store.snapshot()).unwrap();

        assert_eq!(
            ctx.state_json().unwrap().unwrap(),
            r#"{"counter":{"value":3}}"#
        );
    }

    #[test]
    fn state_script_wraps_initial_state() {
        let store = Store::new();
        store.set("banner", json!("hello"));

        let mut ctx = RenderContext::new();
        ctx.attach_state(store.snapshot()).unwrap();

        let script = ctx.state_script().unwrap().unwrap();
        assert!(script.starts_with("<script>window.__INITIAL_STATE__="));
        assert!(script.ends_with(";</script>"));
        assert!(script.contains(r#""banner":"hello""#));
    }

    #[test]
    fn state_script_escapes_script_breakout() {
        let store = Store::new();
        store.set("comment", json!("</script><script>alert(1)</script>"));

        let mut ctx = RenderContext::new();
        ctx.attach_state(store.snapshot()).unwrap();

        let script = ctx.state_script().unwrap().unwrap();
        assert!(!script.contains("</script><script>"));
        assert!(script.contains("\\u003c/script>"));
    }
}
