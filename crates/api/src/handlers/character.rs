//! Handlers for the `/characters` resource.
//!
//! Documents are inserted exactly as submitted; nothing is ever updated or
//! deleted through this API.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use rickdex_core::character::{validate_required_fields, Character};
use rickdex_core::pagination::{Bounds, Pagination};
use rickdex_db::{CharacterFilter, CharacterStore};

use crate::error::{AppError, AppResult};
use crate::query::{PaginationParams, SearchParams};
use crate::response::{CharacterPage, MessageResponse};
use crate::state::AppState;

/// POST /api/characters
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    tracing::info!("Received request to create a new character");

    let character: Character = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Error decoding character JSON");
        AppError::BadRequest("Invalid data format".to_string())
    })?;

    validate_required_fields(&character)?;

    state.store.insert_one(&character).await?;
    tracing::info!(id = character.id, name = %character.name, "Character created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Character created successfully",
        }),
    ))
}

/// GET /api/getCharacters
///
/// Values below 1 are not rejected here, unlike [`search`]. A negative
/// offset (e.g. `page=0`) is clamped to 0, so the first window comes back
/// with the requested `page` echoed unchanged.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<CharacterPage>> {
    let pagination = Pagination::parse(
        params.page.as_deref(),
        params.limit.as_deref(),
        Bounds::Lenient,
    )?;

    let page = fetch_page(state.store.as_ref(), &CharacterFilter::All, pagination).await?;
    Ok(Json(page))
}

/// GET /api/characters/search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<CharacterPage>> {
    let pagination = Pagination::parse(
        params.page.as_deref(),
        params.limit.as_deref(),
        Bounds::Positive,
    )?;

    let name = params
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest("Name parameter is required".to_string()))?;

    let filter = CharacterFilter::NameContains(name);
    let page = fetch_page(state.store.as_ref(), &filter, pagination).await?;
    Ok(Json(page))
}

/// Count the matching set, then load one window of it.
async fn fetch_page(
    store: &dyn CharacterStore,
    filter: &CharacterFilter,
    pagination: Pagination,
) -> AppResult<CharacterPage> {
    let total = store.count_documents(filter).await?;
    let characters = store
        .find(filter, pagination.store_skip(), pagination.limit)
        .await?;

    tracing::debug!(
        ?filter,
        page = pagination.page,
        limit = pagination.limit,
        skip = pagination.skip(),
        total,
        returned = characters.len(),
        "Fetched character page"
    );

    Ok(CharacterPage {
        characters,
        page: pagination.page,
        limit: pagination.limit,
        total,
    })
}
