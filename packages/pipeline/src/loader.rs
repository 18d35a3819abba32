//! Startup loading of the report collection and district table.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use outbreak_map_geography::DistrictTable;
use outbreak_map_report_models::ReportDocument;

use crate::{DashboardConfig, DataPaths, PipelineError};

/// Everything the pipeline needs, loaded once at process start.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub documents: Vec<ReportDocument>,
    pub districts: DistrictTable,
    pub config: DashboardConfig,
}

/// Loads the report collection, the district table, and the dashboard
/// config.
///
/// # Errors
///
/// Returns [`PipelineError`] if any of the files cannot be read or parsed.
pub fn load_inputs(paths: &DataPaths) -> Result<Inputs, PipelineError> {
    let documents = load_documents(&paths.documents)?;
    let districts = DistrictTable::from_path(&paths.districts)?;
    let config = DashboardConfig::load(paths.dashboard_config.as_deref())?;

    Ok(Inputs {
        documents,
        districts,
        config,
    })
}

/// Reads the JSON report collection at `path`.
///
/// # Errors
///
/// Returns [`PipelineError`] if the file cannot be opened or is not a JSON
/// array of report objects.
pub fn load_documents(path: &Path) -> Result<Vec<ReportDocument>, PipelineError> {
    let file = File::open(path)?;
    let documents = parse_documents(BufReader::new(file))?;
    log::info!(
        "Loaded {} report documents from {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

/// Parses a JSON array of reports, keeping only those that carry both a
/// `districts` and a `relevant_outcome_count` key.
///
/// Elements that are not valid report objects (for example a numeric
/// `caseload_phrases` or a `null` district name) are logged and skipped.
///
/// # Errors
///
/// Returns [`PipelineError::Json`] if the input is not a JSON array.
pub fn parse_documents<R: Read>(reader: R) -> Result<Vec<ReportDocument>, PipelineError> {
    let all: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    let total = all.len();

    let documents: Vec<ReportDocument> = all
        .into_iter()
        .enumerate()
        .filter_map(
            |(idx, value)| match serde_json::from_value::<ReportDocument>(value) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    log::warn!("Skipping report document at index {idx}: {e}");
                    None
                }
            },
        )
        .filter(ReportDocument::is_admissible)
        .collect();

    log::debug!(
        "Dropped {} of {total} documents that were malformed or lacked districts or outcome count",
        total - documents.len()
    );

    Ok(documents)
}
