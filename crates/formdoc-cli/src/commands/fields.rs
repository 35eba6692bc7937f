//! Implementation of the `formdoc fields` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};

use formdoc::FieldSpec;

use crate::commands::resolve_form;
use crate::output::table::format_fields_table;

/// Arguments for the fields command.
#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Form whose fields to list (see `formdoc list`)
    #[arg(long, required = true)]
    pub form: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the fields command.
pub fn run_fields(args: FieldsArgs) -> Result<i32> {
    let form = resolve_form(&args.form)?;
    let schema = form.schema();

    if args.json {
        let specs: Vec<&FieldSpec> = schema.specs().collect();
        let json_output = serde_json::to_string_pretty(&specs).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{} - {}", form.name(), form.title());
        let table = format_fields_table(schema);
        println!("{}", table);
    }

    Ok(exitcode::OK)
}
