//! List endpoint parameter helpers: lenient integer parsing, page-based
//! pagination and `orderBy` expression parsing.

use std::fmt;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default page number (`offset` query parameter, 1-based).
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Parse an optional query value as an integer, falling back to `default`
/// when it is absent, blank or not a number.
pub fn parse_int_or(raw: Option<&str>, default: i64) -> i64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Clamp a page size to `1..=max`.
pub fn clamp_limit(limit: i64, max: i64) -> i64 {
    limit.max(1).min(max)
}

/// Number of rows to skip for a 1-based page. Pages below 1 skip nothing.
pub fn rows_to_skip(page: i64, limit: i64) -> i64 {
    if page > 0 {
        (page - 1).saturating_mul(limit)
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A validated `ORDER BY` clause. The column is always one of the names the
/// caller allowed, so it is safe to splice into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortOrder {
    pub const fn new(column: &'static str, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Parse an `orderBy` expression of the form `column [asc|desc]`.
    ///
    /// A bare column sorts descending. Blank input yields `Ok(None)` so the
    /// caller can apply its own default.
    pub fn parse(expr: &str, allowed: &[&'static str]) -> Result<Option<Self>, CoreError> {
        let mut parts = expr.split_whitespace();
        let Some(raw_column) = parts.next() else {
            return Ok(None);
        };

        let column = allowed
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(raw_column))
            .ok_or_else(|| {
                CoreError::InvalidQuery(format!("unsupported orderBy column '{raw_column}'"))
            })?;

        let direction = match parts.next() {
            None => SortDirection::Desc,
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(other) => {
                return Err(CoreError::InvalidQuery(format!(
                    "unsupported orderBy direction '{other}'"
                )))
            }
        };

        if parts.next().is_some() {
            return Err(CoreError::InvalidQuery(format!(
                "malformed orderBy expression '{}'",
                expr.trim()
            )));
        }

        Ok(Some(Self { column, direction }))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_sql())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const COLUMNS: &[&str] = &["id", "name", "created_at"];

    // -- parse_int_or --------------------------------------------------------

    #[test]
    fn parse_int_or_falls_back_on_missing_or_garbage() {
        assert_eq!(parse_int_or(None, 20), 20);
        assert_eq!(parse_int_or(Some(""), 20), 20);
        assert_eq!(parse_int_or(Some("abc"), 20), 20);
        assert_eq!(parse_int_or(Some("1.5"), 1), 1);
    }

    #[test]
    fn parse_int_or_accepts_padded_numbers() {
        assert_eq!(parse_int_or(Some(" 7 "), 1), 7);
        assert_eq!(parse_int_or(Some("-3"), 1), -3);
    }

    // -- paging --------------------------------------------------------------

    #[test]
    fn clamp_limit_keeps_page_size_in_bounds() {
        assert_eq!(clamp_limit(0, MAX_PAGE_SIZE), 1);
        assert_eq!(clamp_limit(500, MAX_PAGE_SIZE), MAX_PAGE_SIZE);
        assert_eq!(clamp_limit(20, MAX_PAGE_SIZE), 20);
    }

    #[test]
    fn rows_to_skip_is_page_based() {
        assert_eq!(rows_to_skip(1, 20), 0);
        assert_eq!(rows_to_skip(3, 20), 40);
        assert_eq!(rows_to_skip(0, 20), 0);
        assert_eq!(rows_to_skip(-4, 20), 0);
    }

    // -- SortOrder -----------------------------------------------------------

    #[test]
    fn blank_order_is_none() {
        assert_matches!(SortOrder::parse("   ", COLUMNS), Ok(None));
    }

    #[test]
    fn bare_column_sorts_descending() {
        let order = SortOrder::parse("name", COLUMNS).unwrap().unwrap();
        assert_eq!(order, SortOrder::new("name", SortDirection::Desc));
        assert_eq!(order.to_string(), "name DESC");
    }

    #[test]
    fn explicit_direction_is_case_insensitive() {
        let order = SortOrder::parse("ID Asc", COLUMNS).unwrap().unwrap();
        assert_eq!(order, SortOrder::new("id", SortDirection::Asc));
    }

    #[test]
    fn unknown_column_is_rejected() {
        assert_matches!(
            SortOrder::parse("password desc", COLUMNS),
            Err(CoreError::InvalidQuery(msg)) if msg.contains("password")
        );
    }

    #[test]
    fn injection_attempt_is_rejected() {
        assert_matches!(
            SortOrder::parse("id; DROP TABLE types", COLUMNS),
            Err(CoreError::InvalidQuery(_))
        );
        assert_matches!(
            SortOrder::parse("id desc, name", COLUMNS),
            Err(CoreError::InvalidQuery(_))
        );
    }
}
