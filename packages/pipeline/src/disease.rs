//! Disease selection and filtering.

use std::collections::BTreeSet;

use outbreak_map_report_models::FilteredRow;

/// The user's disease choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseSelection {
    /// Explicitly chosen diseases. `None` means the user has not chosen
    /// yet and the configured defaults apply; `Some(vec![])` is an explicit
    /// empty choice.
    pub diseases: Option<Vec<String>>,
    /// "Select all diseases". Overrides `diseases` when set.
    pub all: bool,
}

impl DiseaseSelection {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            diseases: None,
            all: true,
        }
    }

    #[must_use]
    pub const fn only(diseases: Vec<String>) -> Self {
        Self {
            diseases: Some(diseases),
            all: false,
        }
    }

    /// Returns the diseases to filter by.
    ///
    /// With `all` set this is every available disease. Without an explicit
    /// choice it is the `defaults` that are actually available.
    #[must_use]
    pub fn resolve(&self, available: &[String], defaults: &[String]) -> Vec<String> {
        if self.all {
            return available.to_vec();
        }

        self.diseases.as_ref().map_or_else(
            || {
                defaults
                    .iter()
                    .filter(|d| available.contains(d))
                    .cloned()
                    .collect()
            },
            Vec::clone,
        )
    }
}

/// Distinct diseases across `rows`, sorted.
#[must_use]
pub fn available_diseases(rows: &[FilteredRow]) -> Vec<String> {
    rows.iter()
        .flat_map(|r| r.matched_disease.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keeps rows matching at least one of `selected`. An empty selection
/// keeps nothing.
#[must_use]
pub fn filter_by_disease(rows: Vec<FilteredRow>, selected: &[String]) -> Vec<FilteredRow> {
    rows.into_iter().filter(|r| r.matches_any(selected)).collect()
}
