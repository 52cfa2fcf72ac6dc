//! Render bootstrap - app construction and prefetch fan-out/fan-in
//!
//! One call per incoming request: fresh store, concurrent launch of
//! every capable component's prefetch hook, fail-fast join, merge into
//! the store, snapshot onto the context.

use std::sync::Arc;

use futures::future;
use tracing::{debug, instrument};

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::registry::ComponentRegistry;
use crate::store::Store;

/// Application root constructed by the bootstrap
///
/// Holds the shared component registry and the store for this render
/// cycle. Rendering the component tree itself happens elsewhere.
#[derive(Clone)]
pub struct App {
    registry: Arc<ComponentRegistry>,
    store: Store,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("components", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl App {
    fn new(registry: Arc<ComponentRegistry>, store: Store) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// The per-request store this app was bootstrapped with
    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// Bootstrap the application for one request.
///
/// Constructs the app over a fresh store (no cross-request state
/// leakage), launches the prefetch hook of every capable component in
/// registration order, and suspends only at the combined join. The join
/// is fail-fast: the first hook error aborts the whole bootstrap and
/// `ctx` is left untouched.
///
/// Each resolved result is written into the store under the result's
/// own tag name; with duplicate tag names the last write in fan-in
/// result order wins. On success the store's full snapshot is attached
/// to `ctx` (its single mutation) and the app is returned.
#[instrument(skip(registry, ctx), fields(components = registry.len(), url = ctx.url().unwrap_or("-")))]
pub async fn render_app(
    registry: Arc<ComponentRegistry>,
    ctx: &mut RenderContext,
) -> Result<App, RenderError> {
    let store = Store::new();
    let app = App::new(Arc::clone(&registry), store.clone());

    // Launch every hook before suspending; the join is the only await.
    let prefetches: Vec<_> = registry
        .prefetchable()
        .map(|(key, hook)| hook.prefetch_data(key))
        .collect();
    debug!(hooks = prefetches.len(), "launching prefetch hooks");

    let results = future::try_join_all(prefetches)
        .await
        .map_err(|e| RenderError::Prefetch(e.to_string()))?;

    for result in results {
        debug!(tag_name = %result.tag_name, "merging prefetched data");
        store.set(result.tag_name, result.data);
    }

    ctx.attach_state(store.snapshot())?;
    Ok(app)
}
