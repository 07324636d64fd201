//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use todo_render::Renderer;

use crate::config::Config;

/// State shared across all HTTP handlers.
///
/// Built once in `main`; tests build their own with an isolated store.
#[derive(Debug)]
pub struct AppState<S> {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// The task list.
    pub store: Arc<S>,
    /// Compiled fragment templates.
    pub renderer: Arc<Renderer>,
}

impl<S> AppState<S> {
    pub fn new(config: Config, store: S, renderer: Renderer) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            renderer: Arc::new(renderer),
        }
    }
}
