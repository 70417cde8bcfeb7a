use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::storage::KeyValueStore;
use crate::config::Config;
use crate::dashboard::JobBoard;
use crate::llm_client::CompletionModel;
use crate::navigation::visits::{VisitRegistry, MAX_VISITS};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionModel>,
    pub config: Config,
    /// Backing store for per-visitor flags (tour completion).
    pub storage: Arc<dyn KeyValueStore>,
    /// Guided-tour engines keyed by visit id.
    pub tours: Arc<RwLock<VisitRegistry>>,
    pub board: Arc<JobBoard>,
}

impl AppState {
    pub fn new(
        llm: Arc<dyn CompletionModel>,
        config: Config,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            llm,
            config,
            tours: Arc::new(RwLock::new(VisitRegistry::new(storage.clone(), MAX_VISITS))),
            storage,
            board: Arc::new(JobBoard::seeded()),
        }
    }
}
