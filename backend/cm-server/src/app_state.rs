use cm_core::CustomerService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CustomerService>,
    /// Used by the readiness check
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(service: Arc<CustomerService>, pool: SqlitePool) -> Self {
        Self { service, pool }
    }
}
