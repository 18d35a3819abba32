//! End-to-end dashboard computation.

use chrono::NaiveDateTime;
use outbreak_map_geography::DistrictResolver;
use outbreak_map_report_models::{FilteredRow, ReportDocument, TimeWindow};

use crate::disease::{available_diseases, filter_by_disease};
use crate::normalize::{DISEASE_SCALE, WINDOW_SCALE, apply_radii};
use crate::time_window::filter_by_window;
use crate::{DashboardConfig, DiseaseSelection};

/// The user's current selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardRequest {
    pub window: TimeWindow,
    pub diseases: DiseaseSelection,
}

/// Message shown in place of the map and table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// No report in the time window could be placed on the map. The
    /// disease selector is not offered.
    NoData,
    /// Reports exist, but none match the selected diseases.
    NoDataForSelection,
}

impl Notice {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoData => "No data to display.",
            Self::NoDataForSelection => "No data available for the selected diseases.",
        }
    }
}

/// Everything the dashboard renders for one set of selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub window: TimeWindow,
    /// Number of reports dated inside the window, before district
    /// resolution.
    pub total_results: usize,
    /// Diseases offered by the disease selector.
    pub available_diseases: Vec<String>,
    /// Diseases the rows were filtered by.
    pub selected_diseases: Vec<String>,
    /// Rows to draw, with radii scaled over this set.
    pub rows: Vec<FilteredRow>,
    pub notice: Option<Notice>,
}

impl Dashboard {
    /// The results line shown above the selectors.
    #[must_use]
    pub fn results_line(&self) -> String {
        format!("Total results: {}", self.total_results)
    }
}

/// Runs the whole pipeline for one request.
#[must_use]
pub fn build_dashboard<R: DistrictResolver + ?Sized>(
    documents: &[ReportDocument],
    resolver: &R,
    request: &DashboardRequest,
    config: &DashboardConfig,
    now: NaiveDateTime,
) -> Dashboard {
    let in_window = filter_by_window(documents, request.window, now);
    let total_results = in_window.len();

    let mut rows = crate::enrich::enrich(&in_window, resolver);
    if rows.is_empty() {
        log::debug!(
            "No mappable reports in window '{}' ({total_results} in window)",
            request.window
        );
        return Dashboard {
            window: request.window,
            total_results,
            available_diseases: Vec::new(),
            selected_diseases: Vec::new(),
            rows,
            notice: Some(Notice::NoData),
        };
    }

    apply_radii(&mut rows, WINDOW_SCALE);

    let available = available_diseases(&rows);
    let selected = request
        .diseases
        .resolve(&available, &config.selector.default_diseases);

    let mut rows = filter_by_disease(rows, &selected);
    apply_radii(&mut rows, DISEASE_SCALE);

    log::debug!(
        "Window '{}': {total_results} in window, {} rows for {} disease(s)",
        request.window,
        rows.len(),
        selected.len()
    );

    let notice = rows.is_empty().then_some(Notice::NoDataForSelection);

    Dashboard {
        window: request.window,
        total_results,
        available_diseases: available,
        selected_diseases: selected,
        rows,
        notice,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use outbreak_map_geography::DistrictTable;
    use outbreak_map_report_models::Coordinate;
    use serde_json::json;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn days_ago(days: i64) -> String {
        (now() - Duration::days(days))
            .date()
            .format("%d/%m/%Y")
            .to_string()
    }

    fn doc(date: &str, districts: &[&str], count: f64, diseases: &[&str]) -> ReportDocument {
        ReportDocument {
            date: Some(json!(date)),
            districts: Some(districts.iter().map(ToString::to_string).collect()),
            relevant_outcome_count: Some(Some(count)),
            matched_disease: Some(diseases.iter().map(ToString::to_string).collect()),
            caseload_phrases: Some(format!("{count} cases")),
        }
    }

    fn table() -> DistrictTable {
        [
            ("X", Coordinate::new(10.0, 20.0)),
            ("Y", Coordinate::new(30.0, 40.0)),
        ]
        .into_iter()
        .collect()
    }

    fn request(window: TimeWindow, diseases: DiseaseSelection) -> DashboardRequest {
        DashboardRequest { window, diseases }
    }

    #[test]
    fn single_report_gets_fallback_radius() {
        let docs = vec![doc(&days_ago(0), &["X"], 50.0, &["dengue"])];
        let dashboard = build_dashboard(
            &docs,
            &table(),
            &request(
                TimeWindow::ThreeMonths,
                DiseaseSelection::only(vec!["dengue".to_string()]),
            ),
            &DashboardConfig::embedded(),
            now(),
        );

        assert_eq!(dashboard.total_results, 1);
        assert_eq!(dashboard.rows.len(), 1);
        assert_eq!(dashboard.rows[0].coordinates, [10.0, 20.0]);
        assert!((dashboard.rows[0].radius - 1000.0).abs() < f64::EPSILON);
        assert_eq!(dashboard.notice, None);
        assert_eq!(dashboard.results_line(), "Total results: 1");
    }

    #[test]
    fn no_mappable_reports_yields_no_data_notice() {
        let docs = vec![
            doc(&days_ago(1), &["Unknown"], 5.0, &["dengue"]),
            doc(&days_ago(400), &["X"], 5.0, &["dengue"]),
        ];
        let dashboard = build_dashboard(
            &docs,
            &table(),
            &DashboardRequest::default(),
            &DashboardConfig::embedded(),
            now(),
        );

        assert_eq!(dashboard.total_results, 1);
        assert!(dashboard.rows.is_empty());
        assert!(dashboard.available_diseases.is_empty());
        assert_eq!(dashboard.notice, Some(Notice::NoData));
    }

    #[test]
    fn empty_disease_selection_yields_empty_rows() {
        let docs = vec![doc(&days_ago(1), &["X"], 5.0, &["dengue"])];
        let dashboard = build_dashboard(
            &docs,
            &table(),
            &request(TimeWindow::ThreeMonths, DiseaseSelection::only(vec![])),
            &DashboardConfig::embedded(),
            now(),
        );

        assert!(dashboard.rows.is_empty());
        assert_eq!(dashboard.available_diseases, vec!["dengue".to_string()]);
        assert_eq!(dashboard.notice, Some(Notice::NoDataForSelection));
        assert_eq!(
            dashboard.notice.map(Notice::message),
            Some("No data available for the selected diseases.")
        );
    }

    #[test]
    fn select_all_matches_selecting_every_disease() {
        let docs = vec![
            doc(&days_ago(1), &["X"], 5.0, &["dengue"]),
            doc(&days_ago(2), &["Y"], 15.0, &["malaria", "cholera"]),
            doc(&days_ago(3), &["Z", "X"], 25.0, &["typhoid"]),
        ];
        let config = DashboardConfig::embedded();

        let all = build_dashboard(
            &docs,
            &table(),
            &request(TimeWindow::OneYear, DiseaseSelection::all()),
            &config,
            now(),
        );
        let every = build_dashboard(
            &docs,
            &table(),
            &request(
                TimeWindow::OneYear,
                DiseaseSelection::only(all.available_diseases.clone()),
            ),
            &config,
            now(),
        );

        assert_eq!(all.rows.len(), 3);
        assert_eq!(all.rows, every.rows);
        assert_eq!(all.selected_diseases, every.selected_diseases);
    }

    #[test]
    fn radii_are_rescaled_over_disease_subset() {
        let docs = vec![
            doc(&days_ago(1), &["X"], 10.0, &["dengue"]),
            doc(&days_ago(1), &["X"], 20.0, &["dengue"]),
            doc(&days_ago(1), &["Y"], 1000.0, &["malaria"]),
        ];
        let dashboard = build_dashboard(
            &docs,
            &table(),
            &request(
                TimeWindow::ThreeMonths,
                DiseaseSelection::only(vec!["dengue".to_string()]),
            ),
            &DashboardConfig::embedded(),
            now(),
        );

        let radii: Vec<f64> = dashboard.rows.iter().map(|r| r.radius).collect();
        assert_eq!(radii.len(), 2);
        assert!((radii[0] - 5.0).abs() < 1e-6);
        assert!((radii[1] - 50_000_005.0).abs() < 1e-6);
    }

    #[test]
    fn default_selection_comes_from_config() {
        let docs = vec![
            doc(&days_ago(1), &["X"], 10.0, &["dengue"]),
            doc(&days_ago(1), &["Y"], 20.0, &["malaria"]),
        ];
        let dashboard = build_dashboard(
            &docs,
            &table(),
            &DashboardRequest::default(),
            &DashboardConfig::embedded(),
            now(),
        );

        assert_eq!(dashboard.selected_diseases, vec!["dengue".to_string()]);
        assert_eq!(dashboard.rows.len(), 1);
        assert_eq!(
            dashboard.available_diseases,
            vec!["dengue".to_string(), "malaria".to_string()]
        );
    }

    #[test]
    fn null_outcome_counts_are_counted_but_not_drawn() {
        let mut null_doc = doc(&days_ago(1), &["X"], 0.0, &["dengue"]);
        null_doc.relevant_outcome_count = Some(None);
        let docs = vec![null_doc, doc(&days_ago(1), &["Y"], 3.0, &["dengue"])];
        let dashboard = build_dashboard(
            &docs,
            &table(),
            &DashboardRequest::default(),
            &DashboardConfig::embedded(),
            now(),
        );

        assert_eq!(dashboard.total_results, 2);
        assert_eq!(dashboard.rows.len(), 1);
        assert_eq!(dashboard.rows[0].coordinates, [30.0, 40.0]);
    }
}
