use std::path::Path;

use crate::commands::load_form;
use crate::OutputFormat;

pub(crate) fn cmd_schema(form_path: &Path, no_logic: bool, output: OutputFormat, quiet: bool) {
    let form = load_form(form_path, output, quiet);
    let schema = formlogic_eval::render_schema(&form, !no_logic);

    if quiet {
        return;
    }
    // The schema is a wire format; both output modes print JSON.
    let rendered = serde_json::to_string_pretty(&schema)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
    println!("{}", rendered);
}
