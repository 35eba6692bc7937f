//! Implementation of the `formdoc check` command.

use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use formdoc::lint_form;

use super::{load_input, resolve_form};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Form to check against (see `formdoc list`)
    #[arg(long, required = true)]
    pub form: String,

    /// JSON file of field values to check; omit to lint the form alone
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a non-zero code if any finding is reported
    #[arg(long)]
    pub strict: bool,
}

/// JSON output format for check findings.
#[derive(Debug, Serialize)]
struct CheckJson {
    form: String,
    lints: Vec<String>,
    warnings: Vec<String>,
    unknown_fields: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let form = resolve_form(&args.form)?;

    // Definition lints come first; they do not depend on input.
    let lints: Vec<String> = lint_form(&form).iter().map(ToString::to_string).collect();

    let (warnings, unknown_fields) = match &args.input {
        Some(path) => {
            let input = load_input(path)?;

            // An unusable definition cannot render; the lint pass above
            // already reported it.
            let warnings: Vec<String> = match form.render(&input) {
                Ok((_, warnings)) => warnings.iter().map(ToString::to_string).collect(),
                Err(_) => Vec::new(),
            };

            let mut unknown: Vec<String> = input
                .keys()
                .filter(|key| form.schema().get(key).is_none())
                .cloned()
                .collect();
            unknown.sort();

            (warnings, unknown)
        }
        None => (Vec::new(), Vec::new()),
    };

    let clean = lints.is_empty() && warnings.is_empty() && unknown_fields.is_empty();

    if args.json {
        let output = CheckJson {
            form: form.name().to_string(),
            lints,
            warnings,
            unknown_fields,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else if clean {
        println!("{}: no findings", form.name());
    } else {
        for finding in &lints {
            println!(
                "{} {}",
                "definition:".if_supports_color(Stream::Stdout, OwoColorize::red),
                finding
            );
        }
        for warning in &warnings {
            println!(
                "{} {}",
                "warning:".if_supports_color(Stream::Stdout, OwoColorize::yellow),
                warning
            );
        }
        for field in &unknown_fields {
            println!(
                "{} input field '{}' is not declared by this form",
                "warning:".if_supports_color(Stream::Stdout, OwoColorize::yellow),
                field
            );
        }
        let total = lints.len() + warnings.len() + unknown_fields.len();
        println!("\n{} finding(s) in {}", total, form.name());
    }

    if args.strict && !clean {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
