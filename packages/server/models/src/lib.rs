#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the outbreak map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the pipeline types to allow independent evolution of the API
//! contract.

use outbreak_map_pipeline::Dashboard;
use outbreak_map_pipeline::config::{DashboardConfig, LabelVisibility, LayerStyle, ViewState};
use outbreak_map_report_models::{FilteredRow, TimeWindow};
use serde::{Deserialize, Serialize};

/// Query parameters for the dashboard endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQueryParams {
    /// Time window label (e.g. `"3 months"`). Defaults to the configured
    /// default window.
    pub window: Option<String>,
    /// Comma-separated list of diseases. Absent means "use the defaults";
    /// present but empty means "no diseases".
    pub diseases: Option<String>,
    /// Select every available disease, overriding `diseases`.
    pub all_diseases: Option<bool>,
}

impl DashboardQueryParams {
    /// Splits `diseases` into trimmed, non-empty names.
    #[must_use]
    pub fn disease_list(&self) -> Option<Vec<String>> {
        self.diseases.as_deref().map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(ToString::to_string)
                .collect()
        })
    }
}

/// A time window offered by the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTimeWindow {
    /// Display label, also the value accepted by `window=`.
    pub label: String,
    /// Days covered by the window.
    pub days: i64,
}

impl From<TimeWindow> for ApiTimeWindow {
    fn from(window: TimeWindow) -> Self {
        Self {
            label: window.to_string(),
            days: window.days(),
        }
    }
}

/// Selector settings returned by `GET /api/time-windows`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSelector {
    /// Windows offered, in display order.
    pub windows: Vec<ApiTimeWindow>,
    /// Label of the preselected window.
    pub default_window: String,
    /// Whether selector labels are shown.
    pub label_visibility: LabelVisibility,
    /// Whether the selectors are read-only.
    pub disabled: bool,
}

impl From<&DashboardConfig> for ApiSelector {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            windows: config
                .selector
                .windows
                .iter()
                .copied()
                .map(ApiTimeWindow::from)
                .collect(),
            default_window: config.selector.default_window.to_string(),
            label_visibility: config.selector.label_visibility,
            disabled: config.selector.disabled,
        }
    }
}

/// A report row as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReportRow {
    /// Report date (`dd/mm/yyyy`).
    pub date: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// District names listed by the report.
    pub districts: Vec<String>,
    /// Outcome count driving the radius.
    pub relevant_outcome_count: f64,
    /// Caseload phrases, used as the map tooltip.
    pub caseload_phrases: String,
    /// Diseases the report matched.
    pub matched_disease: Vec<String>,
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
    /// Point radius in meters.
    pub radius: f64,
}

impl From<FilteredRow> for ApiReportRow {
    fn from(row: FilteredRow) -> Self {
        Self {
            date: row.date,
            latitude: row.latitude,
            longitude: row.longitude,
            districts: row.districts,
            relevant_outcome_count: row.relevant_outcome_count,
            caseload_phrases: row.caseload_phrases,
            matched_disease: row.matched_disease,
            coordinates: row.coordinates,
            radius: row.radius,
        }
    }
}

/// Scatter layer style.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLayer {
    pub opacity: f64,
    pub stroked: bool,
    pub filled: bool,
    pub radius_scale: f64,
    pub radius_min_pixels: f64,
    pub radius_max_pixels: f64,
    pub line_width_min_pixels: f64,
    pub fill_color: [u8; 3],
    pub line_color: [u8; 3],
}

impl From<&LayerStyle> for ApiLayer {
    fn from(style: &LayerStyle) -> Self {
        Self {
            opacity: style.opacity,
            stroked: style.stroked,
            filled: style.filled,
            radius_scale: style.radius_scale,
            radius_min_pixels: style.radius_min_pixels,
            radius_max_pixels: style.radius_max_pixels,
            line_width_min_pixels: style.line_width_min_pixels,
            fill_color: style.fill_color,
            line_color: style.line_color,
        }
    }
}

/// Initial map camera.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
}

impl From<&ViewState> for ApiViewState {
    fn from(view: &ViewState) -> Self {
        Self {
            latitude: view.latitude,
            longitude: view.longitude,
            zoom: view.zoom,
            bearing: view.bearing,
            pitch: view.pitch,
        }
    }
}

/// Response from the dashboard endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDashboard {
    /// Label of the applied time window.
    pub window: String,
    /// `"Total results: N"`.
    pub results_line: String,
    /// Reports dated inside the window.
    pub total_results: usize,
    /// Diseases offered by the disease selector. Empty when there is no
    /// data in the window.
    pub available_diseases: Vec<String>,
    /// Diseases the rows were filtered by.
    pub selected_diseases: Vec<String>,
    /// Rows to draw and list.
    pub rows: Vec<ApiReportRow>,
    /// Layer to draw the rows with. `None` when there is nothing to draw.
    pub layer: Option<ApiLayer>,
    /// Initial map camera.
    pub view_state: ApiViewState,
    /// Message to show in place of the map and table.
    pub message: Option<String>,
}

impl ApiDashboard {
    #[must_use]
    pub fn new(dashboard: Dashboard, config: &DashboardConfig) -> Self {
        let results_line = dashboard.results_line();
        let layer = (!dashboard.rows.is_empty()).then(|| ApiLayer::from(&config.layer));

        Self {
            window: dashboard.window.to_string(),
            results_line,
            total_results: dashboard.total_results,
            available_diseases: dashboard.available_diseases,
            selected_diseases: dashboard.selected_diseases,
            rows: dashboard.rows.into_iter().map(ApiReportRow::from).collect(),
            layer,
            view_state: ApiViewState::from(&config.view_state),
            message: dashboard.notice.map(|n| n.message().to_string()),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
    /// Report documents loaded at startup.
    pub documents: usize,
    /// Districts in the coordinate table.
    pub districts: usize,
}

#[cfg(test)]
mod tests {
    use outbreak_map_pipeline::Notice;

    use super::*;

    #[test]
    fn disease_list_distinguishes_absent_and_empty() {
        let absent = DashboardQueryParams::default();
        assert_eq!(absent.disease_list(), None);

        let empty = DashboardQueryParams {
            diseases: Some(String::new()),
            ..DashboardQueryParams::default()
        };
        assert_eq!(empty.disease_list(), Some(vec![]));

        let some = DashboardQueryParams {
            diseases: Some(" dengue, ,malaria ".to_string()),
            ..DashboardQueryParams::default()
        };
        assert_eq!(
            some.disease_list(),
            Some(vec!["dengue".to_string(), "malaria".to_string()])
        );
    }

    #[test]
    fn dashboard_without_rows_has_no_layer() {
        let config = DashboardConfig::embedded();
        let dashboard = Dashboard {
            window: TimeWindow::OneYear,
            total_results: 4,
            available_diseases: vec!["dengue".to_string()],
            selected_diseases: vec![],
            rows: vec![],
            notice: Some(Notice::NoDataForSelection),
        };
        let api = ApiDashboard::new(dashboard, &config);
        assert!(api.layer.is_none());
        assert_eq!(api.window, "1 year");
        assert_eq!(api.results_line, "Total results: 4");
        assert_eq!(
            api.message.as_deref(),
            Some("No data available for the selected diseases.")
        );
    }

    #[test]
    fn serializes_camel_case() {
        let row = ApiReportRow {
            date: "01/06/2024".to_string(),
            latitude: 20.0,
            longitude: 10.0,
            districts: vec!["X".to_string()],
            relevant_outcome_count: 50.0,
            caseload_phrases: "50 cases".to_string(),
            matched_disease: vec!["dengue".to_string()],
            coordinates: [10.0, 20.0],
            radius: 1000.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["relevantOutcomeCount"], 50.0);
        assert_eq!(json["caseloadPhrases"], "50 cases");
        assert_eq!(json["coordinates"], serde_json::json!([10.0, 20.0]));
    }

    #[test]
    fn selector_lists_configured_windows() {
        let selector = ApiSelector::from(&DashboardConfig::embedded());
        let labels: Vec<&str> = selector.windows.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["3 months", "6 months", "1 year", "All time"]);
        assert_eq!(selector.default_window, "3 months");
        assert_eq!(selector.windows[3].days, 100_000);
    }
}
