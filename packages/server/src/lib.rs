#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web dashboard server for the outbreak map.
//!
//! Loads the report collection and district table once at startup and
//! re-runs the pipeline for every dashboard request. The JSON API feeds a
//! single embedded HTML page that draws the rows with a deck.gl scatter
//! layer and lists them in a table.

mod handlers;
mod html;
pub mod interactive;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use outbreak_map_geography::DistrictTable;
use outbreak_map_pipeline::{DashboardConfig, DataPaths, Inputs, PipelineError, load_inputs};
use outbreak_map_report_models::ReportDocument;
use thiserror::Error;

/// Errors that can stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or running the HTTP server failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input files could not be loaded.
    #[error("Failed to load inputs: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Shared application state. Read-only after startup.
pub struct AppState {
    /// Report documents that passed load-time admission.
    pub documents: Vec<ReportDocument>,
    /// District coordinate table.
    pub districts: DistrictTable,
    /// Selector, layer, and view settings.
    pub config: DashboardConfig,
}

impl From<Inputs> for AppState {
    fn from(inputs: Inputs) -> Self {
        Self {
            documents: inputs.documents,
            districts: inputs.districts,
            config: inputs.config,
        }
    }
}

/// Server settings read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `BIND_ADDR`, default `127.0.0.1`.
    pub bind_addr: String,
    /// `PORT`, default `8080`.
    pub port: u16,
    /// Input file locations.
    pub data: DataPaths,
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self {
            bind_addr,
            port,
            data: DataPaths::from_env(),
        }
    }
}

/// Registers every route. Shared by [`run_server`] and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/time-windows", web::get().to(handlers::time_windows))
            .route("/dashboard", web::get().to(handlers::dashboard))
            .route(
                "/dashboard.geojson",
                web::get().to(handlers::dashboard_geojson),
            ),
    )
    .route("/", web::get().to(handlers::index));
}

/// Starts the outbreak map server.
///
/// Loads the inputs named by the environment (see [`ServerConfig`]) and
/// starts the Actix-Web HTTP server. This is a regular async function;
/// the caller provides the runtime (e.g. via `#[actix_web::main]`) and
/// initializes logging.
///
/// # Errors
///
/// Returns [`ServerError`] if the inputs cannot be loaded or the HTTP
/// server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();

    log::info!("Loading report documents and district table...");
    let inputs = load_inputs(&config.data)?;
    let state = web::Data::new(AppState::from(inputs));

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await?;

    Ok(())
}
