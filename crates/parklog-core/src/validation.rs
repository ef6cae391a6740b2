//! Field validators for park and visit input.
//!
//! Every validator takes the raw string a user typed. Park and visit forms
//! collect one message per failing field, in field order, rather than
//! stopping at the first failure. Dates go through a single tagged parser so
//! establishment dates and visit dates fail for the same reasons.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::entities::{DATE_FORMAT, NewPark, NewVisit, Park, Visit};
use crate::errors::CoreError;

pub const INVALID_NAME: &str = "Invalid park name.";
pub const INVALID_STATE: &str = "Invalid state name.";
pub const INVALID_AREA: &str = "Invalid area.";
pub const INVALID_DESCRIPTION: &str = "Invalid description.";
pub const INVALID_NOTE: &str = "Invalid note.";

/// Why a date string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("a date is required")]
    Empty,
    #[error("use the YYYY-MM-DD format")]
    Malformed,
    #[error("the year must be 1000-9999 and the month 1-12")]
    OutOfRange,
    #[error("that day does not exist in the given month")]
    NonexistentDay,
    #[error("dates cannot be in the future")]
    Future,
}

/// The current local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date that must not be later than today.
///
/// # Errors
///
/// Returns the [`DateError`] describing the first rule the input breaks.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    parse_date_as_of(s, today())
}

/// [`parse_date`] with an explicit notion of "today".
///
/// # Errors
///
/// Returns the [`DateError`] describing the first rule the input breaks.
pub fn parse_date_as_of(s: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    if s.is_empty() {
        return Err(DateError::Empty);
    }

    let parts: Vec<&str> = s.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateError::Malformed);
    };
    if [year, month, day]
        .iter()
        .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(DateError::Malformed);
    }
    if month.len() > 2 || day.len() > 2 {
        return Err(DateError::Malformed);
    }

    // Digits only at this point, so a parse failure means overflow.
    let year: i32 = year.parse().map_err(|_| DateError::OutOfRange)?;
    let month: u32 = month.parse().map_err(|_| DateError::Malformed)?;
    let day: u32 = day.parse().map_err(|_| DateError::Malformed)?;
    if !(1000..=9999).contains(&year) || !(1..=12).contains(&month) {
        return Err(DateError::OutOfRange);
    }

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::NonexistentDay)?;
    if date > today {
        return Err(DateError::Future);
    }
    Ok(date)
}

/// Integer value of the leading numeric prefix of `s`, or 0 if there is none.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Values beyond `i64` saturate.
#[must_use]
pub fn leading_integer(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative { -value } else { value }
}

#[must_use]
pub fn valid_name(s: &str) -> bool {
    !s.trim().is_empty()
}

#[must_use]
pub fn valid_state(s: &str) -> bool {
    !s.trim().is_empty()
}

#[must_use]
pub fn valid_area(s: &str) -> bool {
    leading_integer(s) > 0
}

#[must_use]
pub fn valid_description(s: &str) -> bool {
    !s.trim().is_empty()
}

#[must_use]
pub fn valid_date(s: &str) -> bool {
    parse_date(s).is_ok()
}

/// Error messages for a park submission, in name → state → date → area →
/// description order. Empty when the input is acceptable.
#[must_use]
pub fn validate_park_input(
    name: &str,
    state: &str,
    date: &str,
    area: &str,
    description: &str,
) -> Vec<String> {
    validate_park_input_as_of(name, state, date, area, description, today())
}

/// [`validate_park_input`] with an explicit notion of "today".
#[must_use]
pub fn validate_park_input_as_of(
    name: &str,
    state: &str,
    date: &str,
    area: &str,
    description: &str,
    today: NaiveDate,
) -> Vec<String> {
    let mut errors = Vec::new();
    if !valid_name(name) {
        errors.push(INVALID_NAME.to_string());
    }
    if !valid_state(state) {
        errors.push(INVALID_STATE.to_string());
    }
    if let Err(reason) = parse_date_as_of(date, today) {
        errors.push(date_message(reason));
    }
    if !valid_area(area) {
        errors.push(INVALID_AREA.to_string());
    }
    if !valid_description(description) {
        errors.push(INVALID_DESCRIPTION.to_string());
    }
    errors
}

/// Error messages for a visit submission. A missing or empty note is fine;
/// a supplied note must contain something besides whitespace.
#[must_use]
pub fn validate_visit_input(date: &str, note: Option<&str>) -> Vec<String> {
    validate_visit_input_as_of(date, note, today())
}

/// [`validate_visit_input`] with an explicit notion of "today".
#[must_use]
pub fn validate_visit_input_as_of(date: &str, note: Option<&str>, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();
    if let Err(reason) = parse_date_as_of(date, today) {
        errors.push(date_message(reason));
    }
    if note.is_some_and(|n| !n.is_empty() && n.trim().is_empty()) {
        errors.push(INVALID_NOTE.to_string());
    }
    errors
}

/// True when a park edit would write back exactly what is stored.
///
/// The area is compared as its parsed integer, the date against its
/// `YYYY-MM-DD` rendering; everything else byte for byte.
#[must_use]
pub fn edit_has_no_changes(
    existing: &Park,
    new_name: &str,
    new_state: &str,
    new_date: &str,
    new_area: &str,
    new_description: &str,
) -> bool {
    existing.name == new_name
        && existing.state == new_state
        && existing.date_established.format(DATE_FORMAT).to_string() == new_date
        && existing.area_km2 == leading_integer(new_area)
        && existing.description == new_description
}

/// Visit counterpart of [`edit_has_no_changes`]. An empty note equals no note.
#[must_use]
pub fn visit_has_no_changes(existing: &Visit, new_date: &str, new_note: Option<&str>) -> bool {
    existing.date_visited.format(DATE_FORMAT).to_string() == new_date
        && existing.note.as_deref() == normalize_note(new_note).as_deref()
}

/// Map an empty note to `None` so it is stored as NULL.
#[must_use]
pub fn normalize_note(note: Option<&str>) -> Option<String> {
    note.filter(|n| !n.is_empty()).map(String::from)
}

fn date_message(reason: DateError) -> String {
    format!("Invalid date: {reason}.")
}

/// Raw park form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkForm {
    pub name: String,
    pub state: String,
    pub date_established: String,
    pub area_km2: String,
    pub description: String,
}

impl ParkForm {
    /// A form pre-filled with the stored values of `park`.
    #[must_use]
    pub fn from_park(park: &Park) -> Self {
        Self {
            name: park.name.clone(),
            state: park.state.clone(),
            date_established: park.date_established.format(DATE_FORMAT).to_string(),
            area_km2: park.area_km2.to_string(),
            description: park.description.clone(),
        }
    }

    #[must_use]
    pub fn is_unchanged_from(&self, park: &Park) -> bool {
        edit_has_no_changes(
            park,
            &self.name,
            &self.state,
            &self.date_established,
            &self.area_km2,
            &self.description,
        )
    }

    /// Validate against the current date and convert to typed values.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every failing field.
    pub fn validate(&self) -> Result<NewPark, CoreError> {
        self.validate_as_of(today())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every failing field.
    pub fn validate_as_of(&self, today: NaiveDate) -> Result<NewPark, CoreError> {
        let errors = validate_park_input_as_of(
            &self.name,
            &self.state,
            &self.date_established,
            &self.area_km2,
            &self.description,
            today,
        );
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }
        let date_established = parse_date_as_of(&self.date_established, today)
            .map_err(|reason| CoreError::Validation(vec![date_message(reason)]))?;

        Ok(NewPark {
            name: self.name.clone(),
            state: self.state.clone(),
            date_established,
            area_km2: leading_integer(&self.area_km2),
            description: self.description.clone(),
        })
    }
}

/// Raw visit form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitForm {
    pub date_visited: String,
    pub note: Option<String>,
}

impl VisitForm {
    /// A form pre-filled with the stored values of `visit`.
    #[must_use]
    pub fn from_visit(visit: &Visit) -> Self {
        Self {
            date_visited: visit.date_visited.format(DATE_FORMAT).to_string(),
            note: visit.note.clone(),
        }
    }

    #[must_use]
    pub fn is_unchanged_from(&self, visit: &Visit) -> bool {
        visit_has_no_changes(visit, &self.date_visited, self.note.as_deref())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every failing field.
    pub fn validate(&self) -> Result<NewVisit, CoreError> {
        self.validate_as_of(today())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every failing field.
    pub fn validate_as_of(&self, today: NaiveDate) -> Result<NewVisit, CoreError> {
        let errors = validate_visit_input_as_of(&self.date_visited, self.note.as_deref(), today);
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }
        let date_visited = parse_date_as_of(&self.date_visited, today)
            .map_err(|reason| CoreError::Validation(vec![date_message(reason)]))?;

        Ok(NewVisit {
            date_visited,
            note: normalize_note(self.note.as_deref()),
        })
    }
}
