mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Form branching-logic toolchain.
#[derive(Parser)]
#[command(name = "formlogic", version, about = "Form branching-logic toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a form definition for circular visibility dependencies
    Check {
        /// Path to the form definition JSON (object or bare field array)
        form: PathBuf,
    },

    /// Resolve the visible fields of a form under a set of answers
    Visible {
        /// Path to the form definition JSON
        form: PathBuf,
        /// Path to the answers JSON object
        #[arg(long)]
        answers: PathBuf,
    },

    /// Validate a submission payload against a form definition
    Validate {
        /// Path to the form definition JSON
        form: PathBuf,
        /// Path to the answers JSON object
        #[arg(long)]
        answers: PathBuf,
    },

    /// Generate the public render schema for a form
    Schema {
        /// Path to the form definition JSON
        form: PathBuf,
        /// Omit visibility rules and the dependency graph
        #[arg(long)]
        no_logic: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { form } => commands::check::cmd_check(&form, cli.output, cli.quiet),
        Commands::Visible { form, answers } => {
            commands::visible::cmd_visible(&form, &answers, cli.output, cli.quiet)
        }
        Commands::Validate { form, answers } => {
            commands::validate::cmd_validate(&form, &answers, cli.output, cli.quiet)
        }
        Commands::Schema { form, no_logic } => {
            commands::schema::cmd_schema(&form, no_logic, cli.output, cli.quiet)
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
