//! Application state with a shared `LeadService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Holding the lock across the whole read-append-write makes
//! the service the single writer of its store, which closes the lost-update
//! window between two concurrent submissions.

use std::path::PathBuf;
use std::sync::Arc;

use leadflow_storage::LeadStore;

use crate::service::LeadService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared lead service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<LeadService>>,
}

impl AppState {
    /// Creates a new `AppState` backed by the JSON file at `leads_file`.
    ///
    /// The file need not exist yet; it is created on the first intake.
    pub fn new(leads_file: impl Into<PathBuf>) -> Self {
        Self::from_service(LeadService::open(leads_file))
    }

    /// Creates a new `AppState` with an in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::from_service(LeadService::in_memory())
    }

    /// Creates a new `AppState` over an arbitrary store.
    pub fn with_store(store: Box<dyn LeadStore>) -> Self {
        Self::from_service(LeadService::new(store))
    }

    fn from_service(service: LeadService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }
}
