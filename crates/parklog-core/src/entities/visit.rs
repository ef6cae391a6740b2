use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated visit to a park. At most one visit exists per park and date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visit {
    pub id: i64,
    pub park_id: i64,
    pub date_visited: NaiveDate,
    pub note: Option<String>,
}

/// Validated field values for recording or updating a visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewVisit {
    pub date_visited: NaiveDate,
    /// `None` when no note (or an empty one) was supplied.
    pub note: Option<String>,
}
