#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Outbreak map dashboard server binary.
//!
//! Configured entirely through the environment: `BIND_ADDR`, `PORT`,
//! `DOCUMENTS_PATH`, `DISTRICTS_PATH`, `DASHBOARD_CONFIG` and `RUST_LOG`.

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    outbreak_map_server::run_server().await?;

    Ok(())
}
