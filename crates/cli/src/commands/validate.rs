use std::path::Path;
use std::process;

use crate::commands::load_json;
use crate::OutputFormat;

pub(crate) fn cmd_validate(
    form_path: &Path,
    answers_path: &Path,
    output: OutputFormat,
    quiet: bool,
) {
    let definition = load_json(form_path, output, quiet);
    let payload = load_json(answers_path, output, quiet);

    let report = formlogic_eval::validate_submission_json(&definition, &payload);

    if !quiet {
        match output {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
                println!("{}", json);
            }
            OutputFormat::Text => {
                if report.is_valid {
                    println!("VALID: submission passes");
                    if let (Some(visible), Some(total)) =
                        (report.visible_field_count, report.field_count)
                    {
                        println!("  {} of {} field(s) visible", visible, total);
                    }
                } else {
                    println!("INVALID: {} error(s)", report.errors.len());
                    for error in &report.errors {
                        println!("  {}", error);
                    }
                }
            }
        }
    }

    if !report.is_valid {
        process::exit(1);
    }
}
