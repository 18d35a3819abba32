#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District coordinate table and district name resolution.
//!
//! Outbreak reports only name the districts they concern. This crate
//! loads the static district-to-coordinate table (a CSV export of the
//! district mapping spreadsheet) and resolves a report's district list to
//! a single map point through the [`DistrictResolver`] trait.

pub mod resolver;
pub mod table;

pub use resolver::DistrictResolver;
pub use table::DistrictTable;

use thiserror::Error;

/// Errors that can occur while loading district reference data.
#[derive(Debug, Error)]
pub enum GeographyError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the table header.
    #[error("District table is missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },
}
