//! Prerender - server-side render bootstrap
//!
//! Constructs an application root over a fresh per-request store, runs
//! every registered component's prefetch hook concurrently, and attaches
//! the merged state snapshot to the render context for hydration.
//!
//! ```rust
//! use std::sync::Arc;
//! use prerender::{ComponentRegistry, MockComponent, RenderContext, render_app};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), prerender::RenderError> {
//! let registry = Arc::new(
//!     ComponentRegistry::new()
//!         .with("user-profile", Arc::new(MockComponent::keyed(json!({"name": "Alice"})))),
//! );
//!
//! let mut ctx = RenderContext::for_url("/profile");
//! let app = render_app(registry, &mut ctx).await?;
//!
//! assert_eq!(ctx.state().unwrap().len(), 1);
//! assert!(app.store().contains("user-profile"));
//! # Ok(())
//! # }
//! ```

pub mod component;
pub mod context;
pub mod error;
pub mod registry;
pub mod render;
pub mod store;

pub use component::{Component, MockComponent, PrefetchData, PrefetchResult};
pub use context::RenderContext;
pub use error::{FixSuggestion, RenderError};
pub use registry::ComponentRegistry;
pub use render::{render_app, App};
pub use store::{StateSnapshot, Store};
