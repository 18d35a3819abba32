//! District-to-coordinate reference table.
//!
//! The table is a CSV export of the district mapping spreadsheet. It must
//! carry a `district`, an `x` (longitude) and a `y` (latitude) column; any
//! other columns are ignored. Names are matched exactly and
//! case-sensitively, and when a district appears more than once the first
//! row wins.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use outbreak_map_report_models::Coordinate;
use serde::Deserialize;

use crate::{DistrictResolver, GeographyError};

const REQUIRED_COLUMNS: &[&str] = &["district", "x", "y"];

/// One row of the district spreadsheet.
#[derive(Debug, Deserialize)]
struct DistrictRecord {
    district: String,
    x: Option<f64>,
    y: Option<f64>,
}

/// In-memory district coordinate lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistrictTable {
    entries: BTreeMap<String, Coordinate>,
}

impl DistrictTable {
    /// Loads the table from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`GeographyError`] if the file cannot be opened, the header
    /// cannot be read, or a required column is missing.
    pub fn from_path(path: &Path) -> Result<Self, GeographyError> {
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        log::info!(
            "Loaded {} districts from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parses the table from any CSV source.
    ///
    /// Rows with a missing or non-numeric coordinate are logged and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GeographyError`] if the header cannot be read or a
    /// required column is missing.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GeographyError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for &column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(GeographyError::MissingColumn { column });
            }
        }

        let mut table = Self::default();
        for (idx, result) in rdr.deserialize::<DistrictRecord>().enumerate() {
            // Header is line 1.
            let line = idx + 2;
            match result {
                Ok(DistrictRecord {
                    district,
                    x: Some(x),
                    y: Some(y),
                }) => table.insert(district, Coordinate::new(x, y)),
                Ok(record) => {
                    log::warn!(
                        "Skipping district '{}' on line {line}: missing coordinate",
                        record.district
                    );
                }
                Err(e) => log::warn!("Skipping district row on line {line}: {e}"),
            }
        }

        Ok(table)
    }

    /// Inserts a district unless it is already present.
    pub fn insert(&mut self, district: String, coordinate: Coordinate) {
        self.entries.entry(district).or_insert(coordinate);
    }

    #[must_use]
    pub fn get(&self, district: &str) -> Option<Coordinate> {
        self.entries.get(district).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates district names in sorted order.
    pub fn districts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, Coordinate)> for DistrictTable {
    fn from_iter<I: IntoIterator<Item = (S, Coordinate)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (district, coordinate) in iter {
            table.insert(district.into(), coordinate);
        }
        table
    }
}

impl DistrictResolver for DistrictTable {
    fn lookup(&self, district: &str) -> Option<Coordinate> {
        self.get(district)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_rows_and_ignores_extra_columns() {
        let csv = "state,district,x,y\nMaharashtra,Pune,73.85,18.52\nKerala,Ernakulam,76.27,9.98\n";
        let table = DistrictTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Pune"), Some(Coordinate::new(73.85, 18.52)));
        assert_eq!(table.get("Ernakulam"), Some(Coordinate::new(76.27, 9.98)));
    }

    #[test]
    fn first_row_wins_for_duplicate_districts() {
        let csv = "district,x,y\nPune,1,2\nPune,3,4\n";
        let table = DistrictTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Pune"), Some(Coordinate::new(1.0, 2.0)));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table: DistrictTable = [("Pune", Coordinate::new(1.0, 2.0))].into_iter().collect();
        assert!(table.lookup("Pune").is_some());
        assert!(table.lookup("pune").is_none());
        assert!(table.lookup(" Pune").is_none());
    }

    #[test]
    fn skips_rows_with_bad_coordinates() {
        let csv = "district,x,y\nPune,73.85,18.52\nNowhere,,\nBroken,abc,1\n";
        let table = DistrictTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.districts().collect::<Vec<_>>(), vec!["Pune"]);
    }

    #[test]
    fn rejects_table_without_required_columns() {
        let csv = "name,lon,lat\nPune,73.85,18.52\n";
        let err = DistrictTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            GeographyError::MissingColumn { column: "district" }
        ));
    }

    #[test]
    fn resolves_first_known_district_in_list_order() {
        let table: DistrictTable = [
            ("Pune", Coordinate::new(1.0, 2.0)),
            ("Mumbai", Coordinate::new(3.0, 4.0)),
        ]
        .into_iter()
        .collect();
        let districts = vec![
            "Unknown".to_string(),
            "Mumbai".to_string(),
            "Pune".to_string(),
        ];
        assert_eq!(table.resolve(&districts), Some(Coordinate::new(3.0, 4.0)));
    }
}
