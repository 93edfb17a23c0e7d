//! Response bodies for the character endpoints.

use rickdex_core::character::StoredCharacter;
use serde::Serialize;

/// One page of characters plus the size of the whole matching set.
///
/// `characters` is always serialized as an array, even when empty.
#[derive(Debug, Serialize)]
pub struct CharacterPage {
    pub characters: Vec<StoredCharacter>,
    pub page: i64,
    pub limit: i64,
    pub total: u64,
}

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
