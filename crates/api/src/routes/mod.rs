pub mod character;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /getCharacters          paginated list
/// POST   /characters             create
/// GET    /characters/search      paginated name search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(character::router())
}
