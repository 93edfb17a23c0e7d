//! Page/limit parsing and offset arithmetic for list and search endpoints.
//!
//! Query values arrive as raw strings so a non-numeric value can be
//! reported with our own message instead of the extractor's rejection.

use crate::error::CoreError;

/// Page used when the request does not specify one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request does not specify one.
pub const DEFAULT_LIMIT: i64 = 10;

/// How strictly `page` and `limit` are checked after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Any integer is accepted, including zero and negatives.
    Lenient,
    /// Both values must be at least 1.
    Positive,
}

/// A requested window into a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Parse optional `page`/`limit` query values.
    ///
    /// Absent and empty values fall back to [`DEFAULT_PAGE`] / [`DEFAULT_LIMIT`].
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        bounds: Bounds,
    ) -> Result<Self, CoreError> {
        let page = parse_param(page, DEFAULT_PAGE, bounds, "Invalid page number")?;
        let limit = parse_param(limit, DEFAULT_LIMIT, bounds, "Invalid limit number")?;
        Ok(Self { page, limit })
    }

    /// Number of documents to skip: `(page - 1) * limit`.
    ///
    /// May be negative for lenient input; saturates instead of overflowing.
    pub fn skip(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// [`skip`](Self::skip) clamped to what a store cursor accepts.
    pub fn store_skip(&self) -> u64 {
        u64::try_from(self.skip()).unwrap_or(0)
    }
}

fn parse_param(
    raw: Option<&str>,
    default: i64,
    bounds: Bounds,
    message: &str,
) -> Result<i64, CoreError> {
    let value = match raw {
        None | Some("") => return Ok(default),
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| CoreError::InvalidParameter(message.to_string()))?,
    };

    if bounds == Bounds::Positive && value < 1 {
        return Err(CoreError::InvalidParameter(message.to_string()));
    }
    Ok(value)
}
