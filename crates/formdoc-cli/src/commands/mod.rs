//! CLI command implementations.

mod check;
mod fields;
mod list;
mod render;

pub use check::{run_check, CheckArgs};
pub use fields::{run_fields, FieldsArgs};
pub use list::{run_list, ListArgs};
pub use render::{run_render, RenderArgs};

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, IntoDiagnostic};

use formdoc::{compute_suggestions, Form, InputMap};

use crate::output::InputDiagnostic;

/// Look up a shipped form, with a did-you-mean hint when the name is wrong.
fn resolve_form(name: &str) -> miette::Result<Form> {
    formdoc_forms::build(name).map_err(|e| {
        let names: Vec<String> = formdoc_forms::FORM_NAMES
            .iter()
            .map(ToString::to_string)
            .collect();
        let suggestions = compute_suggestions(name, &names);
        match suggestions.first() {
            Some(suggestion) => miette!("{}. Did you mean '{}'?", e, suggestion),
            None => miette!("{}. Run `formdoc list` to see the available forms.", e),
        }
    })
}

/// Read a JSON input file into an input map.
fn load_input(path: &Path) -> miette::Result<InputMap> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read input file {:?}: {}", path, e))?;

    match serde_json::from_str::<InputMap>(&content) {
        Ok(input) => Ok(input),
        Err(e) => {
            let diagnostic = InputDiagnostic::from_json_error(path, &content, &e);
            Err(diagnostic.into())
        }
    }
}
