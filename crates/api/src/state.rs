use std::sync::Arc;

use rickdex_db::CharacterStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and never mutated; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the `characters` collection.
    pub store: Arc<dyn CharacterStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
