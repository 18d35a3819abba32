//! Recency filtering.
//!
//! A report is kept when its date, taken at midnight, lies in
//! `[now - window, now]`. Reports whose date is missing, not a string, or
//! not a `%d/%m/%Y` date are skipped and logged; they never abort the run.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use outbreak_map_report_models::{REPORT_DATE_FORMAT, ReportDocument, TimeWindow};
use thiserror::Error;

/// Why a report's date could not be used.
#[derive(Debug, Error)]
pub enum DateError {
    #[error("date is missing")]
    Missing,

    #[error("date is not a string: {0}")]
    NotAString(serde_json::Value),

    #[error("invalid date '{value}': {source}")]
    Malformed {
        value: String,
        source: chrono::ParseError,
    },
}

/// Parses a report's raw `date` value.
///
/// # Errors
///
/// Returns [`DateError`] if the value is absent, not a string, or not in
/// `%d/%m/%Y` format.
pub fn parse_report_date(value: Option<&serde_json::Value>) -> Result<NaiveDate, DateError> {
    let value = value.ok_or(DateError::Missing)?;
    let serde_json::Value::String(s) = value else {
        return Err(DateError::NotAString(value.clone()));
    };

    NaiveDate::parse_from_str(s, REPORT_DATE_FORMAT).map_err(|source| DateError::Malformed {
        value: s.clone(),
        source,
    })
}

/// Earliest instant included by `window` when evaluated at `now`.
#[must_use]
pub fn cutoff(window: TimeWindow, now: NaiveDateTime) -> NaiveDateTime {
    now.checked_sub_signed(TimeDelta::days(window.days()))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Returns the reports dated inside `window`, in input order.
#[must_use]
pub fn filter_by_window(
    documents: &[ReportDocument],
    window: TimeWindow,
    now: NaiveDateTime,
) -> Vec<&ReportDocument> {
    let start = cutoff(window, now);

    documents
        .iter()
        .filter(|doc| match parse_report_date(doc.date.as_ref()) {
            Ok(date) => {
                let at = date.and_time(NaiveTime::MIN);
                start <= at && at <= now
            }
            Err(e) => {
                log::error!("Skipping report with unusable date: {e}");
                false
            }
        })
        .collect()
}
