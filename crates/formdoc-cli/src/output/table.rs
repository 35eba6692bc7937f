//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

use formdoc::{FieldSchema, Form};

/// Format a form's field contracts as an ASCII table.
pub fn format_fields_table(schema: &FieldSchema) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Kind", "Default", "Label"]);

    for spec in schema.specs() {
        let default = match &spec.default {
            Some(value) => value.to_string(),
            None => String::new(),
        };
        table.add_row(vec![
            spec.name.clone(),
            spec.kind.to_string(),
            default,
            spec.label.clone().unwrap_or_default(),
        ]);
    }

    table
}

/// Format the form registry as an ASCII table.
pub fn format_forms_table(forms: &[Form]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Title", "Sections", "Fields"]);

    for form in forms {
        table.add_row(vec![
            form.name().to_string(),
            form.title().to_string(),
            form.sections().len().to_string(),
            form.schema().len().to_string(),
        ]);
    }

    table
}
