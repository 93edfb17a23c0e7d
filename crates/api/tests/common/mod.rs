//! Shared helpers for API integration tests.
//!
//! Requests go straight into the router via `tower::ServiceExt::oneshot`,
//! backed by an in-memory [`CharacterStore`] so no MongoDB is needed.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use rickdex_api::config::ServerConfig;
use rickdex_api::router::build_app_router;
use rickdex_api::state::AppState;
use rickdex_core::character::{Character, StoredCharacter, StoredDocument};
use rickdex_db::{CharacterFilter, CharacterStore, DbError, StoreConfig};
use tower::ServiceExt;

/// Evaluate a filter the way the Mongo query built for it would:
/// `NameContains` is an escaped, case-insensitive regex on `name`.
pub fn filter_matches(filter: &CharacterFilter, character: &Character) -> bool {
    match filter {
        CharacterFilter::All => true,
        CharacterFilter::NameContains(query) => regex::RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .unwrap()
            .is_match(&character.name),
    }
}

/// Vector-backed store with the same skip/limit semantics as MongoDB.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<Character>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn with_characters(characters: Vec<Character>) -> Self {
        Self {
            documents: Mutex::new(characters),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail as if the server timed out.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<Character> {
        self.documents.lock().unwrap().clone()
    }

    fn check(&self, operation: &'static str) -> Result<(), DbError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Timeout { operation, secs: 10 });
        }
        Ok(())
    }
}

#[async_trait]
impl CharacterStore for MemoryStore {
    async fn insert_one(&self, character: &Character) -> Result<(), DbError> {
        self.check("insert_one")?;
        self.documents.lock().unwrap().push(character.clone());
        Ok(())
    }

    async fn count_documents(&self, filter: &CharacterFilter) -> Result<u64, DbError> {
        self.check("count_documents")?;
        let documents = self.documents.lock().unwrap();
        Ok(documents.iter().filter(|c| filter_matches(filter, c)).count() as u64)
    }

    async fn find(
        &self,
        filter: &CharacterFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<StoredCharacter>, DbError> {
        self.check("find")?;
        // MongoDB treats 0 as "no limit" and a negative limit as its magnitude.
        let take = if limit == 0 {
            usize::MAX
        } else {
            limit.unsigned_abs() as usize
        };

        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .enumerate()
            .filter(|(_, c)| filter_matches(filter, c))
            .skip(skip as usize)
            .take(take)
            .map(|(index, c)| StoredCharacter {
                object_id: Some(format!("{index:024x}")),
                document: StoredDocument::Typed(c.clone()),
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.check("ping")
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 10,
        store: StoreConfig {
            url: "mongodb://localhost:27017".to_string(),
            database: "rickAndMorty".to_string(),
            collection: "characters".to_string(),
            operation_timeout: Duration::from_secs(10),
        },
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// A character with the three required fields filled in.
pub fn character(id: i64, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        ..Default::default()
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
