//! Store adapter for the `characters` collection.
//!
//! [`CharacterStore`] is the seam handlers depend on; [`MongoCharacterStore`]
//! is the production implementation.

pub mod mongo;
pub mod store;

use std::time::Duration;

pub use mongo::MongoCharacterStore;
pub use store::{CharacterFilter, CharacterStore};

/// Default per-call bound on store operations.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors surfaced by the store adapter.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("{operation} timed out after {secs}s")]
    Timeout { operation: &'static str, secs: u64 },

    #[error("Failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
}

/// Where the collection lives and how long each call may take.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string (`mongodb://` or `mongodb+srv://`).
    pub url: String,
    pub database: String,
    pub collection: String,
    pub operation_timeout: Duration,
}
