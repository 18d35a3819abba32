#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Outbreak report types shared across the outbreak-map workspace.
//!
//! A [`ReportDocument`] is one pre-built outbreak report as it appears in
//! the input JSON collection. Documents are never mutated; the pipeline
//! derives a [`FilteredRow`] for every document that survives filtering
//! and district resolution.

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Placeholder shown when a document carries no caseload phrases.
pub const NO_CASELOAD_PHRASES: &str = "No data available";

/// Date format used by the `date` field of report documents.
pub const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// A geographic point in the district coordinate table.
///
/// `x` is the longitude and `y` the latitude, matching the column names
/// of the district spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude.
    pub x: f64,
    /// Latitude.
    pub y: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.y
    }

    /// Returns the point as `[longitude, latitude]`, the position order
    /// expected by map layers and `GeoJSON`.
    #[must_use]
    pub const fn position(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// One outbreak report from the input document collection.
///
/// Every field is optional because the collection is produced by an
/// upstream extraction step that omits keys it could not fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Report date, expected as a `%d/%m/%Y` string. Kept as raw JSON so
    /// that non-string values can be detected and skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<serde_json::Value>,
    /// District names mentioned by the report, in order of appearance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub districts: Option<Vec<String>>,
    /// Outcome count. The outer `Option` records whether the key was
    /// present at all, the inner one whether its value was `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub relevant_outcome_count: Option<Option<f64>>,
    /// Diseases the report was matched against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_disease: Option<Vec<String>>,
    /// Free-text caseload phrases extracted from the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caseload_phrases: Option<String>,
}

impl ReportDocument {
    /// Whether the document carries both a `districts` and a
    /// `relevant_outcome_count` key. Only such documents are kept when
    /// the collection is loaded; a `null` count still qualifies here.
    #[must_use]
    pub const fn is_admissible(&self) -> bool {
        self.districts.is_some() && self.relevant_outcome_count.is_some()
    }

    /// Returns the outcome count if the key is present and non-null.
    #[must_use]
    pub fn outcome_count(&self) -> Option<f64> {
        self.relevant_outcome_count.flatten()
    }

    /// Returns the caseload phrases, or [`NO_CASELOAD_PHRASES`] if absent.
    #[must_use]
    pub fn caseload_phrases_or_default(&self) -> &str {
        self.caseload_phrases
            .as_deref()
            .unwrap_or(NO_CASELOAD_PHRASES)
    }

    /// Returns the district list, or an empty slice if absent.
    #[must_use]
    pub fn district_names(&self) -> &[String] {
        self.districts.as_deref().unwrap_or_default()
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

/// Recency window offered by the dashboard's time period selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TimeWindow {
    #[serde(rename = "7 days")]
    #[strum(serialize = "7 days")]
    SevenDays,
    #[serde(rename = "30 days")]
    #[strum(serialize = "30 days")]
    ThirtyDays,
    #[default]
    #[serde(rename = "3 months")]
    #[strum(serialize = "3 months")]
    ThreeMonths,
    #[serde(rename = "6 months")]
    #[strum(serialize = "6 months")]
    SixMonths,
    #[serde(rename = "1 year")]
    #[strum(serialize = "1 year")]
    OneYear,
    /// Effectively unbounded: uses a sentinel day count far beyond any
    /// report in the collection.
    #[serde(rename = "All time")]
    #[strum(serialize = "All time")]
    AllTime,
}

impl TimeWindow {
    /// Day count used for [`Self::AllTime`].
    pub const ALL_TIME_DAYS: i64 = 100_000;

    /// Number of days covered by this window.
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
            Self::OneYear => 365,
            Self::AllTime => Self::ALL_TIME_DAYS,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SevenDays,
            Self::ThirtyDays,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::OneYear,
            Self::AllTime,
        ]
    }
}

/// A report that survived time filtering and district resolution, ready
/// to be drawn on the map and listed in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredRow {
    /// Report date as it appeared in the document.
    pub date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub districts: Vec<String>,
    pub relevant_outcome_count: f64,
    pub caseload_phrases: String,
    pub matched_disease: Vec<String>,
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
    /// Point radius in meters, recomputed at every filtering boundary.
    pub radius: f64,
}

impl FilteredRow {
    /// Whether any of this row's diseases appears in `selected`.
    #[must_use]
    pub fn matches_any(&self, selected: &[String]) -> bool {
        self.matched_disease.iter().any(|d| selected.contains(d))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn distinguishes_missing_and_null_outcome_count() {
        let missing: ReportDocument = serde_json::from_str(r#"{"districts": ["Pune"]}"#).unwrap();
        assert_eq!(missing.relevant_outcome_count, None);
        assert!(!missing.is_admissible());

        let null: ReportDocument =
            serde_json::from_str(r#"{"districts": ["Pune"], "relevant_outcome_count": null}"#)
                .unwrap();
        assert_eq!(null.relevant_outcome_count, Some(None));
        assert!(null.is_admissible());
        assert_eq!(null.outcome_count(), None);

        let present: ReportDocument =
            serde_json::from_str(r#"{"districts": ["Pune"], "relevant_outcome_count": 12}"#)
                .unwrap();
        assert_eq!(present.outcome_count(), Some(12.0));
    }

    #[test]
    fn keeps_non_string_dates_as_raw_json() {
        let doc: ReportDocument = serde_json::from_str(r#"{"date": 20240101}"#).unwrap();
        assert_eq!(doc.date, Some(serde_json::json!(20_240_101)));
    }

    #[test]
    fn defaults_caseload_phrases() {
        let doc = ReportDocument::default();
        assert_eq!(doc.caseload_phrases_or_default(), NO_CASELOAD_PHRASES);

        let doc = ReportDocument {
            caseload_phrases: Some("12 cases".to_string()),
            ..ReportDocument::default()
        };
        assert_eq!(doc.caseload_phrases_or_default(), "12 cases");
    }

    #[test]
    fn time_window_labels_round_trip_through_strum() {
        for window in TimeWindow::all() {
            let parsed = TimeWindow::from_str(window.as_ref()).unwrap();
            assert_eq!(parsed, *window);
        }
        assert_eq!(TimeWindow::from_str("3 months").unwrap().days(), 90);
        assert_eq!(TimeWindow::AllTime.days(), 100_000);
        assert!(TimeWindow::from_str("2 weeks").is_err());
    }

    #[test]
    fn time_window_serde_uses_labels() {
        let json = serde_json::to_string(&TimeWindow::OneYear).unwrap();
        assert_eq!(json, r#""1 year""#);
        assert_eq!(TimeWindow::default(), TimeWindow::ThreeMonths);
    }

    #[test]
    fn coordinate_position_is_longitude_first() {
        let c = Coordinate::new(10.0, 20.0);
        assert_eq!(c.position(), [10.0, 20.0]);
        assert!((c.latitude() - 20.0).abs() < f64::EPSILON);
        assert!((c.longitude() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn row_matches_any_selected_disease() {
        let row = FilteredRow {
            date: "01/01/2024".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            districts: vec![],
            relevant_outcome_count: 1.0,
            caseload_phrases: NO_CASELOAD_PHRASES.to_string(),
            matched_disease: vec!["dengue".to_string(), "malaria".to_string()],
            coordinates: [0.0, 0.0],
            radius: 0.0,
        };
        assert!(row.matches_any(&["malaria".to_string()]));
        assert!(!row.matches_any(&["cholera".to_string()]));
        assert!(!row.matches_any(&[]));
    }
}
