//! Shared application state passed to request handlers.

use std::sync::Arc;

use panchito_core::settings::Settings;

use crate::db::Db;

/// State cloned into every handler. Settings are immutable behind an
/// `Arc`; the pool handles are internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub db: Db,
}

impl AppState {
    pub fn new(settings: Settings, db: Db) -> Self {
        Self {
            settings: Arc::new(settings),
            db,
        }
    }
}
