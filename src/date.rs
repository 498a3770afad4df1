//! Calendar helpers for due dates.
//!
//! Dates travel through the whole crate as `dd/mm/yyyy` strings; this
//! module owns today/tomorrow formatting and the one fallible parse.

use chrono::{Duration, Local, NaiveDate};

use crate::error::{Error, Result};

/// On-disk and on-screen format for due dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Current local date as `dd/mm/yyyy`.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Tomorrow's local date as `dd/mm/yyyy`.
pub fn tomorrow() -> String {
    (Local::now().date_naive() + Duration::days(1))
        .format(DATE_FORMAT)
        .to_string()
}

/// Parse a `dd/mm/yyyy` string, rejecting anything malformed.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let date =
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| Error::DateFormat(s.to_string()))?;
    // Require the canonical zero-padded form so stored dates compare as
    // plain strings.
    if date.format(DATE_FORMAT).to_string() != s {
        return Err(Error::DateFormat(s.to_string()));
    }
    Ok(date)
}
