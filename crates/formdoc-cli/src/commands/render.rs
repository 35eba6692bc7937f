//! Implementation of the `formdoc render` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use formdoc::{Document, InputMap};

use super::{load_input, resolve_form};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Form to render (see `formdoc list`)
    #[arg(long, required = true)]
    pub form: String,

    /// JSON file of field values; omit to preview a blank form
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output the content tree as JSON instead of the text preview
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub document: Document,
    pub warnings: Vec<String>,
}

/// Run the render command.
pub fn run_render(args: RenderArgs, verbose: bool) -> miette::Result<i32> {
    let form = resolve_form(&args.form)?;

    // No input file renders the blank-form preview: every field falls
    // back to its declared default or a visible placeholder.
    let input = match &args.input {
        Some(path) => load_input(path)?,
        None => InputMap::new(),
    };

    let (document, warnings) = form.render(&input).into_diagnostic()?;

    if args.json {
        let output = RenderResult {
            document,
            warnings: warnings.iter().map(ToString::to_string).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
        return Ok(exitcode::OK);
    }

    if verbose {
        // Section keys with their assigned labels, for tracing how the
        // input shifted the numbering.
        for section in &document.sections {
            match &section.label {
                Some(label) => eprintln!("included: {} [{}]", section.key, label),
                None => eprintln!("included: {}", section.key),
            }
        }
    }

    println!("{}", document);

    for warning in &warnings {
        eprintln!(
            "{} {}",
            "warning:".if_supports_color(Stream::Stderr, OwoColorize::yellow),
            warning
        );
    }

    Ok(exitcode::OK)
}
