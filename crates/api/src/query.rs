//! Query parameter types for the character endpoints.
//!
//! Numeric parameters are taken as raw strings and parsed by
//! [`rickdex_core::pagination::Pagination::parse`], so a bad value yields
//! our own 400 body rather than the extractor's rejection.

use serde::Deserialize;

/// `?page=&limit=` for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// `?name=&page=&limit=` for the search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}
