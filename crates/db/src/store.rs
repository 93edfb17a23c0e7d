use async_trait::async_trait;
use rickdex_core::character::{Character, StoredCharacter};

use crate::DbError;

/// Predicate selecting which characters a count or find applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterFilter {
    /// Every document in the collection.
    All,
    /// Case-insensitive substring match on `name`. The text is literal,
    /// not a pattern.
    NameContains(String),
}

/// Collection-level operations the API needs from the document store.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Insert one document exactly as given.
    async fn insert_one(&self, character: &Character) -> Result<(), DbError>;

    /// Count documents matching `filter`.
    async fn count_documents(&self, filter: &CharacterFilter) -> Result<u64, DbError>;

    /// Return up to `limit` matching documents after skipping `skip`, in
    /// the store's natural order.
    async fn find(
        &self,
        filter: &CharacterFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<StoredCharacter>, DbError>;

    /// Round-trip to the server to confirm it is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
