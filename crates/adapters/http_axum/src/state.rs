//! Shared application state for axum handlers.

use std::sync::Arc;

use barberhub_app::ports::BarbershopRepository;
use barberhub_app::services::directory_service::DirectoryService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Directory use-cases (create, list, seed).
    pub directory_service: Arc<DirectoryService<R>>,
    /// Storage handle used only by the diagnostic endpoint.
    pub repo: Arc<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            directory_service: Arc::clone(&self.directory_service),
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> AppState<R>
where
    R: BarbershopRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service and a storage handle.
    pub fn new(directory_service: DirectoryService<R>, repo: R) -> Self {
        Self {
            directory_service: Arc::new(directory_service),
            repo: Arc::new(repo),
        }
    }
}
