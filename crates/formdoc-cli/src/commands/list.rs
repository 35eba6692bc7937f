//! Implementation of the `formdoc list` command.

use serde::Serialize;

use crate::output::table::format_forms_table;

/// Arguments for the list command.
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for the form registry.
#[derive(Debug, Serialize)]
struct FormJson {
    name: String,
    title: String,
    sections: usize,
    fields: usize,
}

/// Run the list command.
pub fn run_list(args: ListArgs) -> miette::Result<i32> {
    let forms = formdoc_forms::all();

    if args.json {
        let json_data: Vec<FormJson> = forms
            .iter()
            .map(|form| FormJson {
                name: form.name().to_string(),
                title: form.title().to_string(),
                sections: form.sections().len(),
                fields: form.schema().len(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json_data).expect("JSON serialization should not fail")
        );
    } else {
        let table = format_forms_table(&forms);
        println!("{}", table);
    }

    Ok(exitcode::OK)
}
