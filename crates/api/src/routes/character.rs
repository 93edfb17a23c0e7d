//! Route definitions for the character collection.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET    /getCharacters          -> list
/// POST   /characters             -> create
/// GET    /characters/search      -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getCharacters", get(character::list))
        .route("/characters", post(character::create))
        .route("/characters/search", get(character::search))
}
