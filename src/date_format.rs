//! Fixed pt-BR display formatting for publication dates.
//!
//! Formatting is total: input that cannot be parsed as a date is returned
//! verbatim so rendering never fails on a bad timestamp.

use chrono::{DateTime, Datelike, NaiveDate};

const MONTHS_LONG: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho",
    "agosto", "setembro", "outubro", "novembro", "dezembro",
];

const MONTHS_ABBREV: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out",
    "nov", "dez",
];

fn parse_date(iso: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.date_naive());
    }
    // The repository emits offsets without a colon, e.g. "+0000".
    if let Ok(dt) = DateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}

/// Long form used on listing pages: `15 de março de 2021`.
pub fn display_date(iso: &str) -> String {
    match parse_date(iso) {
        Some(date) => format!(
            "{:02} de {} de {}",
            date.day(),
            MONTHS_LONG[date.month0() as usize],
            date.year()
        ),
        None => iso.to_string(),
    }
}

/// Abbreviated form used on detail pages: `15 de mar. de 2021`.
pub fn display_date_abbrev(iso: &str) -> String {
    match parse_date(iso) {
        Some(date) => format!(
            "{:02} de {}. de {}",
            date.day(),
            MONTHS_ABBREV[date.month0() as usize],
            date.year()
        ),
        None => iso.to_string(),
    }
}
