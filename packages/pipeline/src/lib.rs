#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Outbreak report dashboard pipeline.
//!
//! Turns the static report collection into what the dashboard draws:
//!
//! 1. keep reports dated inside the selected [`TimeWindow`]
//!    ([`time_window`]),
//! 2. resolve each report's districts to a map point ([`enrich`]),
//! 3. scale outcome counts into point radii ([`normalize`]),
//! 4. keep reports matching the selected diseases ([`disease`]) and scale
//!    the radii again over that subset.
//!
//! [`build_dashboard`] runs all of it. The pipeline is pure and
//! synchronous; callers re-run it for every change of selection.
//!
//! [`TimeWindow`]: outbreak_map_report_models::TimeWindow

pub mod config;
pub mod dashboard;
pub mod disease;
pub mod enrich;
pub mod features;
pub mod loader;
pub mod normalize;
pub mod time_window;

pub use config::{DashboardConfig, DataPaths};
pub use dashboard::{Dashboard, DashboardRequest, Notice, build_dashboard};
pub use disease::DiseaseSelection;
pub use loader::{Inputs, load_documents, load_inputs};

use outbreak_map_geography::GeographyError;
use thiserror::Error;

/// Errors that can occur while loading pipeline inputs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document collection is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dashboard config is not valid TOML.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// The district table could not be loaded.
    #[error(transparent)]
    Geography(#[from] GeographyError),
}
