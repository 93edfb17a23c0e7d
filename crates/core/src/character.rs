//! Character record as submitted by clients and stored in the collection.
//!
//! The shape follows the public Rick and Morty API. Every field defaults
//! when absent so partially-filled documents still decode; only `name`,
//! `status` and `species` are checked by [`validate_required_fields`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Message returned when a create request omits a required field.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields: name, status, species";

/// Decode an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A place a character comes from or currently lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// A character document.
///
/// `created` is whatever timestamp string the client sent; the service
/// never generates it. Fields outside the known set are kept in `extra`
/// and written back unchanged. Known fields sent as `null` take their
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub species: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub origin: Location,
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub episode: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a document read back from the collection.
///
/// Documents whose known fields do not fit [`Character`] (say an `id`
/// stored as a string) are returned as raw key/value pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredDocument {
    Typed(Character),
    Untyped(Map<String, Value>),
}

/// A character read back from the collection, with the store's own
/// document identifier alongside the stored fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredCharacter {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(flatten)]
    pub document: StoredDocument,
}

/// Reject characters whose `name`, `status` or `species` is empty.
///
/// Absent fields decode to empty strings, so this also covers missing keys.
pub fn validate_required_fields(character: &Character) -> Result<(), CoreError> {
    if character.name.is_empty() || character.status.is_empty() || character.species.is_empty()
    {
        return Err(CoreError::Validation(MISSING_REQUIRED_FIELDS.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn rick() -> Character {
        Character {
            id: 1,
            name: "Rick Sanchez".to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_character_passes_validation() {
        assert!(validate_required_fields(&rick()).is_ok());
    }

    #[test]
    fn empty_name_fails_validation() {
        let character = Character {
            name: String::new(),
            ..rick()
        };
        assert_matches!(
            validate_required_fields(&character),
            Err(CoreError::Validation(msg)) if msg == MISSING_REQUIRED_FIELDS
        );
    }

    #[test]
    fn empty_status_or_species_fails_validation() {
        let no_status = Character {
            status: String::new(),
            ..rick()
        };
        let no_species = Character {
            species: String::new(),
            ..rick()
        };
        assert!(validate_required_fields(&no_status).is_err());
        assert!(validate_required_fields(&no_species).is_err());
    }

    #[test]
    fn missing_keys_decode_to_empty_and_fail_validation() {
        let character: Character = serde_json::from_value(json!({ "name": "Morty Smith" })).unwrap();
        assert_eq!(character.status, "");
        assert_eq!(character.episode, Vec::<String>::new());
        assert!(validate_required_fields(&character).is_err());
    }

    #[test]
    fn type_field_uses_wire_name() {
        let character: Character = serde_json::from_value(json!({
            "name": "Birdperson",
            "type": "Bird-Person",
        }))
        .unwrap();
        assert_eq!(character.kind, "Bird-Person");

        let value = serde_json::to_value(&character).unwrap();
        assert_eq!(value["type"], "Bird-Person");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn stored_character_serializes_flat_with_object_id() {
        let stored = StoredCharacter {
            object_id: Some("66f1c2a9e4b0a1b2c3d4e5f6".to_string()),
            document: StoredDocument::Typed(rick()),
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["_id"], "66f1c2a9e4b0a1b2c3d4e5f6");
        assert_eq!(value["name"], "Rick Sanchez");
        assert!(value.get("document").is_none());
    }

    #[test]
    fn untyped_stored_document_serializes_raw_fields() {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!("abc"));
        fields.insert("name".to_string(), json!("Rick Sanchez"));
        let stored = StoredCharacter {
            object_id: None,
            document: StoredDocument::Untyped(fields),
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value, json!({ "id": "abc", "name": "Rick Sanchez" }));
    }

    #[test]
    fn null_known_fields_decode_as_defaults() {
        let character: Character = serde_json::from_value(json!({
            "id": null,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": null,
            "origin": null,
            "location": { "name": null, "url": "" },
            "episode": null,
        }))
        .unwrap();

        assert_eq!(character.id, 0);
        assert_eq!(character.kind, "");
        assert_eq!(character.origin, Location::default());
        assert_eq!(character.location.name, "");
        assert!(character.episode.is_empty());
        assert!(character.extra.is_empty());
        assert!(validate_required_fields(&character).is_ok());
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let input = json!({
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "species": "Human",
            "origin": { "name": "unknown", "url": "" },
            "episode": ["https://rickandmortyapi.com/api/episode/1"],
            "nickname": "Mort",
        });
        let character: Character = serde_json::from_value(input).unwrap();
        assert_eq!(character.extra.get("nickname"), Some(&json!("Mort")));
        assert_eq!(character.origin.name, "unknown");

        let output = serde_json::to_value(&character).unwrap();
        assert_eq!(output["nickname"], "Mort");
        assert_eq!(output["episode"][0], "https://rickandmortyapi.com/api/episode/1");
    }
}
