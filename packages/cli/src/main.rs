#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command line entry point for the outbreak map dashboard.
//!
//! ```text
//! outbreak_map_cli serve
//! outbreak_map_cli report [--window "3 months"] [--disease dengue]... [--all-diseases]
//!                         [--no-default-diseases] [--format table|json|geojson]
//! ```
//!
//! Running with no subcommand starts the server in interactive mode. Input
//! files are taken from `DOCUMENTS_PATH`, `DISTRICTS_PATH` and
//! `DASHBOARD_CONFIG`.

mod report;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "outbreak_map_cli",
    about = "Outbreak report map dashboard and headless reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server (configured from the environment)
    Serve,
    /// Run the dashboard pipeline once and print the result
    Report {
        /// Time window label
        #[arg(long, default_value = "3 months")]
        window: String,
        /// Disease to include (repeatable). Without any, the configured
        /// default diseases are used
        #[arg(long = "disease")]
        diseases: Vec<String>,
        /// Include every disease found in the time window
        #[arg(long)]
        all_diseases: bool,
        /// Treat an empty --disease list as an explicit empty selection
        #[arg(long)]
        no_default_diseases: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = report::OutputFormat::Table)]
        format: report::OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    match cli.command {
        None => {
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(outbreak_map_server::interactive::run())
            })
            .await??;
        }
        Some(Commands::Serve) => {
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(outbreak_map_server::run_server())
            })
            .await??;
        }
        Some(Commands::Report {
            window,
            diseases,
            all_diseases,
            no_default_diseases,
            format,
        }) => {
            let options = report::ReportOptions {
                window,
                diseases: (!diseases.is_empty() || no_default_diseases).then_some(diseases),
                all_diseases,
                format,
            };
            print!("{}", report::run(&options)?);
        }
    }

    Ok(())
}
