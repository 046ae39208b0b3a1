use std::path::Path;
use std::process;

use crate::commands::load_form;
use crate::OutputFormat;

pub(crate) fn cmd_check(form_path: &Path, output: OutputFormat, quiet: bool) {
    let form = load_form(form_path, output, quiet);
    let report = formlogic_analyze::check_fields(&form.fields);

    if !quiet {
        match output {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
                println!("{}", json);
            }
            OutputFormat::Text => {
                println!("Visibility Logic Check");
                println!("======================");
                println!();
                println!("  Fields: {}", report.field_count);
                println!("  Visibility edges: {}", report.edge_count);

                if !report.findings.is_empty() {
                    println!();
                    println!("Findings:");
                    for finding in &report.findings {
                        println!("  [{}] {}", finding.severity.label(), finding.message);
                    }
                }

                println!();
                if report.is_valid() {
                    println!("OK: no circular dependencies");
                } else {
                    println!(
                        "INVALID: circular fields: {}",
                        report.logic.circular_fields.join(", ")
                    );
                }
            }
        }
    }

    if !report.is_valid() {
        process::exit(1);
    }
}
