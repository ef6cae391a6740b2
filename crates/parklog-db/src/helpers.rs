//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. Dates are stored as `YYYY-MM-DD` TEXT so that lexical order is
//! chronological order.

use chrono::NaiveDate;
use parklog_core::entities::DATE_FORMAT;

use crate::error::DatabaseError;

/// Parse a stored TEXT date column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column does not hold a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Render a date the way it is stored.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// `LIMIT`/`OFFSET` parameters for a one-based page.
#[must_use]
pub fn page_bounds(page_size: u32, page_num: u32) -> (i64, i64) {
    let offset = parklog_core::pagination::offset(page_size, page_num);
    (
        i64::from(page_size),
        i64::try_from(offset).unwrap_or(i64::MAX),
    )
}

/// Read a single `COUNT(...)` result.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the query produced no row.
pub async fn read_count(mut rows: libsql::Rows) -> Result<i64, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_round_trip_through_storage_format() {
        let date = NaiveDate::from_ymd_opt(1872, 3, 1).unwrap();
        assert_eq!(format_date(date), "1872-03-01");
        assert_eq!(parse_date("1872-03-01").unwrap(), date);
    }

    #[test]
    fn bad_stored_date_is_a_query_error() {
        assert!(matches!(parse_date("March 1872"), Err(DatabaseError::Query(_))));
    }

    #[test]
    fn page_bounds_follow_offset_rule() {
        assert_eq!(page_bounds(5, 1), (5, 0));
        assert_eq!(page_bounds(5, 3), (5, 10));
        assert_eq!(page_bounds(3, 2), (3, 3));
    }
}
