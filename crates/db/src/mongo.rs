//! MongoDB-backed [`CharacterStore`].

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};
use rickdex_core::character::{Character, StoredCharacter, StoredDocument};

use crate::store::{CharacterFilter, CharacterStore};
use crate::{DbError, StoreConfig};

/// Handle to one collection, shared by every request.
///
/// `Client` pools connections internally and is cheap to clone.
#[derive(Clone)]
pub struct MongoCharacterStore {
    client: Client,
    collection: Collection<Document>,
    operation_timeout: Duration,
}

impl MongoCharacterStore {
    /// Build a client from `config.url` and verify the server answers a ping.
    ///
    /// The driver connects lazily, so without the ping a bad host would
    /// only surface on the first request.
    pub async fn connect(config: &StoreConfig) -> Result<Self, DbError> {
        let client = Client::with_uri_str(&config.url).await?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        let store = Self {
            client,
            collection,
            operation_timeout: config.operation_timeout,
        };
        store.ping().await?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );
        Ok(store)
    }

    async fn bounded<F, T>(&self, operation: &'static str, call: F) -> Result<T, DbError>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, call).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(DbError::Timeout {
                operation,
                secs: self.operation_timeout.as_secs(),
            }),
        }
    }
}

/// Translate a filter into a MongoDB query document.
pub fn filter_document(filter: &CharacterFilter) -> Document {
    match filter {
        CharacterFilter::All => doc! {},
        CharacterFilter::NameContains(query) => doc! {
            "name": { "$regex": regex::escape(query), "$options": "i" }
        },
    }
}

/// Split `_id` off a raw document and decode the rest as a [`Character`].
///
/// A document that does not fit the typed record is passed through as
/// relaxed extended JSON rather than failing the whole page.
fn decode_stored(mut document: Document) -> StoredCharacter {
    let object_id = document.remove("_id").map(|id| match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    });

    let document = match mongodb::bson::from_document::<Character>(document.clone()) {
        Ok(character) => StoredDocument::Typed(character),
        Err(e) => {
            tracing::warn!(
                object_id = object_id.as_deref().unwrap_or("-"),
                error = %e,
                "Stored character does not match the typed shape, returning raw fields"
            );
            match Bson::Document(document).into_relaxed_extjson() {
                serde_json::Value::Object(fields) => StoredDocument::Untyped(fields),
                _ => StoredDocument::Untyped(serde_json::Map::new()),
            }
        }
    };

    StoredCharacter {
        object_id,
        document,
    }
}

#[async_trait]
impl CharacterStore for MongoCharacterStore {
    async fn insert_one(&self, character: &Character) -> Result<(), DbError> {
        let document = mongodb::bson::to_document(character)?;
        let result = self
            .bounded("insert_one", self.collection.insert_one(document))
            .await?;
        tracing::debug!(inserted_id = %result.inserted_id, "Inserted character");
        Ok(())
    }

    async fn count_documents(&self, filter: &CharacterFilter) -> Result<u64, DbError> {
        self.bounded(
            "count_documents",
            self.collection.count_documents(filter_document(filter)),
        )
        .await
    }

    async fn find(
        &self,
        filter: &CharacterFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<StoredCharacter>, DbError> {
        let query = filter_document(filter);
        let documents = self
            .bounded("find", async {
                let cursor = self.collection.find(query).skip(skip).limit(limit).await?;
                cursor.try_collect::<Vec<Document>>().await
            })
            .await?;

        Ok(documents.into_iter().map(decode_stored).collect())
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.bounded(
            "ping",
            self.client.database("admin").run_command(doc! { "ping": 1 }),
        )
        .await?;
        Ok(())
    }
}
