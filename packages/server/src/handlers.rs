//! HTTP handler functions for the outbreak map API.

use std::str::FromStr as _;

use actix_web::{HttpResponse, web};
use outbreak_map_pipeline::features::to_feature_collection;
use outbreak_map_pipeline::{Dashboard, DashboardRequest, DiseaseSelection, build_dashboard};
use outbreak_map_report_models::TimeWindow;
use outbreak_map_server_models::{ApiDashboard, ApiHealth, ApiSelector, DashboardQueryParams};

use crate::AppState;

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        documents: state.documents.len(),
        districts: state.districts.len(),
    })
}

/// `GET /api/time-windows`
///
/// Returns the windows offered by the time period selector.
pub async fn time_windows(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiSelector::from(&state.config))
}

/// `GET /api/dashboard`
///
/// Runs the pipeline for the requested window and disease selection.
pub async fn dashboard(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    match compute(&state, &params) {
        Ok(dashboard) => HttpResponse::Ok().json(ApiDashboard::new(dashboard, &state.config)),
        Err(response) => response,
    }
}

/// `GET /api/dashboard.geojson`
///
/// Same selection as [`dashboard`], returned as a `GeoJSON` point
/// `FeatureCollection`.
pub async fn dashboard_geojson(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let dashboard = match compute(&state, &params) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };

    match serde_json::to_string(&to_feature_collection(&dashboard.rows)) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/geo+json")
            .body(body),
        Err(e) => {
            log::error!("Failed to serialize GeoJSON: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to serialize GeoJSON"
            }))
        }
    }
}

/// `GET /`
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(crate::html::INDEX_HTML)
}

/// Parses the query and runs the pipeline, or returns the error response
/// to send instead.
fn compute(state: &AppState, params: &DashboardQueryParams) -> Result<Dashboard, HttpResponse> {
    let window = match params.window.as_deref() {
        Some(label) => TimeWindow::from_str(label.trim()).map_err(|_| {
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Unknown time window '{label}'")
            }))
        })?,
        None => state.config.selector.default_window,
    };

    let request = DashboardRequest {
        window,
        diseases: DiseaseSelection {
            diseases: params.disease_list(),
            all: params.all_diseases.unwrap_or(false),
        },
    };

    let now = chrono::Local::now().naive_local();

    Ok(build_dashboard(
        &state.documents,
        &state.districts,
        &request,
        &state.config,
        now,
    ))
}
