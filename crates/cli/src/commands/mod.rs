pub(crate) mod check;
pub(crate) mod schema;
pub(crate) mod validate;
pub(crate) mod visible;

use std::path::Path;
use std::process;

use crate::{report_error, OutputFormat};

/// Read and parse a JSON file, exiting with status 1 on failure.
pub(crate) fn load_json(path: &Path, output: OutputFormat, quiet: bool) -> serde_json::Value {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => {
            let msg = format!("error: file not found: {}", path.display());
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error: invalid JSON in {}: {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

/// Load and parse a form definition, exiting with status 1 on failure.
pub(crate) fn load_form(path: &Path, output: OutputFormat, quiet: bool) -> formlogic_core::Form {
    let value = load_json(path, output, quiet);
    match formlogic_core::form_from_json(&value) {
        Ok(form) => form,
        Err(e) => {
            let msg = format!("error: invalid form definition: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}
