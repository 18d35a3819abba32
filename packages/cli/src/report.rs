//! Headless `report` subcommand: one pipeline run printed to stdout.

use std::fmt::Write as _;
use std::str::FromStr as _;

use outbreak_map_pipeline::features::to_feature_collection;
use outbreak_map_pipeline::{
    Dashboard, DashboardRequest, DataPaths, DiseaseSelection, build_dashboard, load_inputs,
};
use outbreak_map_report_models::TimeWindow;

const DISTRICTS_WIDTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Geojson,
}

pub struct ReportOptions {
    pub window: String,
    /// `None` lets the configured default diseases apply.
    pub diseases: Option<Vec<String>>,
    pub all_diseases: bool,
    pub format: OutputFormat,
}

/// Loads the inputs named by the environment, runs the pipeline, and
/// renders the result.
pub fn run(options: &ReportOptions) -> Result<String, Box<dyn std::error::Error>> {
    let window = TimeWindow::from_str(options.window.trim()).map_err(|_| {
        let labels: Vec<&str> = TimeWindow::all().iter().map(AsRef::<str>::as_ref).collect();
        format!(
            "Unknown time window '{}'. Expected one of: {}",
            options.window,
            labels.join(", ")
        )
    })?;

    let inputs = load_inputs(&DataPaths::from_env())?;

    let request = DashboardRequest {
        window,
        diseases: DiseaseSelection {
            diseases: options.diseases.clone(),
            all: options.all_diseases,
        },
    };
    let now = chrono::Local::now().naive_local();
    let dashboard = build_dashboard(
        &inputs.documents,
        &inputs.districts,
        &request,
        &inputs.config,
        now,
    );

    log::debug!("Report produced {} row(s)", dashboard.rows.len());

    Ok(render(&dashboard, options.format)?)
}

fn render(dashboard: &Dashboard, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(format_table(dashboard)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&dashboard.rows)? + "\n"),
        OutputFormat::Geojson => {
            Ok(serde_json::to_string_pretty(&to_feature_collection(&dashboard.rows))? + "\n")
        }
    }
}

fn format_table(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    writeln!(out, "{}", dashboard.results_line()).unwrap();

    if !dashboard.available_diseases.is_empty() {
        writeln!(
            out,
            "Diseases: {} (selected: {})",
            dashboard.available_diseases.join(", "),
            if dashboard.selected_diseases.is_empty() {
                "none".to_string()
            } else {
                dashboard.selected_diseases.join(", ")
            }
        )
        .unwrap();
    }

    if let Some(notice) = dashboard.notice {
        writeln!(out, "{}", notice.message()).unwrap();
        return out;
    }

    writeln!(
        out,
        "{:<DISTRICTS_WIDTH$} {:>10} CASELOAD PHRASES",
        "DISTRICTS", "COUNT"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(80)).unwrap();

    for row in &dashboard.rows {
        writeln!(
            out,
            "{:<DISTRICTS_WIDTH$} {:>10} {}",
            truncate(&row.districts.join(", "), DISTRICTS_WIDTH),
            row.relevant_outcome_count,
            row.caseload_phrases
        )
        .unwrap();
    }

    writeln!(out, "\n{} row(s)", dashboard.rows.len()).unwrap();
    out
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width - 3).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}
