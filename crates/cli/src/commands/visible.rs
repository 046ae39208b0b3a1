use std::path::Path;

use formlogic_core::AnswerSet;

use crate::commands::{load_form, load_json};
use crate::OutputFormat;

pub(crate) fn cmd_visible(
    form_path: &Path,
    answers_path: &Path,
    output: OutputFormat,
    quiet: bool,
) {
    let form = load_form(form_path, output, quiet);
    let payload = load_json(answers_path, output, quiet);
    let answers = AnswerSet::from_json(&payload);

    let visible = formlogic_eval::visible_fields(&form.fields, &answers);

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "visibleFields": visible,
                "visibleFieldCount": visible.len(),
                "fieldCount": form.fields.len(),
            });
            let rendered = serde_json::to_string_pretty(&json)
                .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
            println!("{}", rendered);
        }
        OutputFormat::Text => {
            println!("{} of {} field(s) visible", visible.len(), form.fields.len());
            for field in &visible {
                println!("  {}", field.id);
            }
        }
    }
}
