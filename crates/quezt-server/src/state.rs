use quezt_core::config::Config;
use quezt_core::ContentStore;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// Both halves are built once before serving and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: ContentStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Built-in content with default config.
    pub fn seeded() -> quezt_core::Result<Self> {
        Ok(Self::new(ContentStore::seed()?, Config::default()))
    }
}
