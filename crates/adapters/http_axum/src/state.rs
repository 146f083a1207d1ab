//! Shared application state for axum handlers.

use std::sync::Arc;

use voltwise_app::services::controller_service::ControllerService;

/// Application state shared across all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Evaluates slider input into decisions and view models.
    pub controller: Arc<ControllerService>,
}

impl AppState {
    /// Create a new application state from a service instance.
    pub fn new(controller: ControllerService) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }
}
