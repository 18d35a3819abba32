//! Interactive mode for the server.
//!
//! Prompts the user for the input files, bind address and port before
//! starting the server.

use dialoguer::{Confirm, Input};

use crate::{ServerConfig, ServerError};

/// Runs the server in interactive mode, prompting for configuration.
///
/// Each prompt defaults to the value currently in the environment. The
/// answers are written back to `DOCUMENTS_PATH`, `DISTRICTS_PATH`,
/// `BIND_ADDR` and `PORT` before delegating to [`super::run_server`].
///
/// # Errors
///
/// Returns [`ServerError`] if the underlying server fails to start.
#[allow(clippy::future_not_send)]
pub async fn run() -> Result<(), ServerError> {
    println!("Outbreak Map Server");
    println!();

    let current = ServerConfig::from_env();

    let documents = prompt(
        "Report documents (JSON)",
        &current.data.documents.display().to_string(),
    );
    let districts = prompt(
        "District table (CSV)",
        &current.data.districts.display().to_string(),
    );
    let bind_addr = prompt("Bind address", &current.bind_addr);
    let port_str = prompt("Port", &current.port.to_string());

    // SAFETY: We are single-threaded at this point (before server starts) and
    // these variables are only read once during server initialisation.
    unsafe {
        std::env::set_var("DOCUMENTS_PATH", &documents);
        std::env::set_var("DISTRICTS_PATH", &districts);
        std::env::set_var("BIND_ADDR", &bind_addr);
        std::env::set_var("PORT", &port_str);
    }

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port_str}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server().await
}

fn prompt(label: &str, default: &str) -> String {
    Input::new()
        .with_prompt(label)
        .default(default.to_string())
        .interact_text()
        .unwrap_or_else(|_| default.to_string())
}
