//! District enrichment.
//!
//! Turns time-filtered reports into map rows. A report becomes a row only
//! if it names its diseases, has a non-null outcome count, and one of its
//! districts resolves to a coordinate. Anything else is dropped silently.

use outbreak_map_geography::DistrictResolver;
use outbreak_map_report_models::{FilteredRow, ReportDocument};

/// Builds a row for every report that can be placed on the map.
///
/// Radii are left at zero; see [`crate::normalize`].
#[must_use]
pub fn enrich<R: DistrictResolver + ?Sized>(
    documents: &[&ReportDocument],
    resolver: &R,
) -> Vec<FilteredRow> {
    documents
        .iter()
        .filter_map(|doc| to_row(doc, resolver))
        .collect()
}

fn to_row<R: DistrictResolver + ?Sized>(
    doc: &ReportDocument,
    resolver: &R,
) -> Option<FilteredRow> {
    let matched_disease = doc.matched_disease.as_ref()?;
    let coordinate = resolver.resolve(doc.district_names())?;
    let count = doc.outcome_count()?;

    Some(FilteredRow {
        date: doc
            .date
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string(),
        latitude: coordinate.latitude(),
        longitude: coordinate.longitude(),
        districts: doc.district_names().to_vec(),
        relevant_outcome_count: count,
        caseload_phrases: doc.caseload_phrases_or_default().to_string(),
        matched_disease: matched_disease.clone(),
        coordinates: coordinate.position(),
        radius: 0.0,
    })
}
