//! The content tree handed to the external renderer, and the composer
//! helpers shared by every form.
//!
//! The engine stops at a tree of styled blocks. Pagination, fonts, running
//! headers, and page numbers belong to the downstream layout engine; the
//! tree carries semantic styling (tones, emphasis) and layout hints
//! (page breaks), nothing more. Everything serializes as `type`-tagged
//! JSON so the tree can cross a process boundary.

use serde::Serialize;

use crate::derive::{Comparable, adjustment_cell};
use crate::engine::{RenderContext, RenderWarning};
use crate::format::{format_currency, format_signed_currency};
use crate::types::TriState;

// ============================================================================
// Content tree
// ============================================================================

/// A fully assembled document, ready for the external renderer.
///
/// `Display` produces a plain-text preview used by the CLI and by tests;
/// it flattens styling and drops layout hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Registry name of the form that produced this document.
    pub form: String,
    pub title: String,
    pub sections: Vec<RenderedSection>,
}

/// One section after selection and label assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    /// The section's stable key from its definition.
    pub key: String,
    /// Assigned label, e.g. `"3"` or `"B"`. `None` for unlabeled sections.
    pub label: Option<String>,
    /// Display heading with the label already applied, e.g.
    /// `"3. Security Deposit"` or `"Addendum B - Pet Addendum"`.
    pub heading: Option<String>,
    /// Hint to the renderer to start this section on a fresh page.
    pub starts_new_page: bool,
    pub blocks: Vec<Block>,
}

/// A block-level element of the content tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        inlines: Vec<Inline>,
    },
    /// An intra-section heading. `level` 1 is the most prominent.
    Heading {
        level: u8,
        text: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
    /// Vertical gap; sizing is the renderer's choice.
    Spacer,
    /// Visible stand-in for content that could not be produced.
    Placeholder {
        text: String,
    },
    /// A signing rule with the signer's printed name and role beneath it.
    SignatureLine {
        label: String,
        name: String,
    },
    /// Hint to resume on a fresh page.
    PageBreak,
}

impl Block {
    /// A paragraph of plain, unstyled text.
    pub fn text(text: impl Into<String>) -> Self {
        Block::Paragraph {
            inlines: vec![Inline::text(text)],
        }
    }

    /// A paragraph from pre-styled inline runs.
    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Block::Paragraph { inlines }
    }

    /// An intra-section heading.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }
}

/// One table cell: a run of styled inlines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub inlines: Vec<Inline>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell {
            inlines: vec![Inline::text(text)],
        }
    }

    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Cell { inlines }
    }

    pub fn empty() -> Self {
        Cell {
            inlines: Vec::new(),
        }
    }
}

/// An inline run inside a paragraph or cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text {
        text: String,
        bold: bool,
        italic: bool,
        tone: Tone,
    },
    /// A checked or unchecked box, optionally captioned.
    Checkbox {
        checked: bool,
        label: String,
    },
}

impl Inline {
    /// Plain text with default styling.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            bold: false,
            italic: false,
            tone: Tone::Normal,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            bold: true,
            italic: false,
            tone: Tone::Normal,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            bold: false,
            italic: true,
            tone: Tone::Normal,
        }
    }

    /// Plain text carrying a semantic tone.
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Inline::Text {
            text: text.into(),
            bold: false,
            italic: false,
            tone,
        }
    }

    pub fn checkbox(checked: bool, label: impl Into<String>) -> Self {
        Inline::Checkbox {
            checked,
            label: label.into(),
        }
    }
}

/// Semantic color intent. The renderer decides the palette; the engine
/// only records whether a value reads as favorable or unfavorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Normal,
    Positive,
    Negative,
}

// ============================================================================
// Plain-text preview
// ============================================================================

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for section in &self.sections {
            writeln!(f)?;
            if let Some(heading) = &section.heading {
                writeln!(f, "{heading}")?;
            }
            for block in &section.blocks {
                write_block(f, block)?;
            }
        }
        Ok(())
    }
}

fn write_block(f: &mut std::fmt::Formatter<'_>, block: &Block) -> std::fmt::Result {
    match block {
        Block::Paragraph { inlines } => writeln!(f, "{}", inline_text(inlines)),
        Block::Heading { text, .. } => writeln!(f, "{text}"),
        Block::Table { headers, rows } => {
            writeln!(f, "{}", headers.join(" | "))?;
            for row in rows {
                let cells: Vec<String> = row.iter().map(cell_text).collect();
                writeln!(f, "{}", cells.join(" | "))?;
            }
            Ok(())
        }
        Block::Spacer => writeln!(f),
        Block::Placeholder { text } => writeln!(f, "{text}"),
        Block::SignatureLine { label, name } => {
            writeln!(f, "{}", "_".repeat(40))?;
            if name.is_empty() {
                writeln!(f, "{label}")
            } else {
                writeln!(f, "{name}, {label}")
            }
        }
        Block::PageBreak => Ok(()),
    }
}

fn cell_text(cell: &Cell) -> String {
    inline_text(&cell.inlines)
}

/// Flattened text of an inline run, checkboxes as `[x]` / `[ ]`.
pub fn inline_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text { text, .. } => out.push_str(text),
            Inline::Checkbox { checked, label } => {
                out.push_str(if *checked { "[x]" } else { "[ ]" });
                if !label.is_empty() {
                    out.push(' ');
                    out.push_str(label);
                }
            }
        }
    }
    out
}

// ============================================================================
// Composer helpers
// ============================================================================

/// Column spec for [`record_table`].
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    /// Record field the column reads.
    pub field: String,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// The field's display text, numbers included.
    Text,
    /// Formatted through [`format_currency`]; missing and zero read `---`.
    Money,
    /// A checked/unchecked box from a boolean record field.
    Checkbox,
}

impl Column {
    pub fn text(header: impl Into<String>, field: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            field: field.into(),
            kind: ColumnKind::Text,
        }
    }

    pub fn money(header: impl Into<String>, field: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            field: field.into(),
            kind: ColumnKind::Money,
        }
    }

    pub fn checkbox(header: impl Into<String>, field: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            field: field.into(),
            kind: ColumnKind::Checkbox,
        }
    }
}

/// A repeated-row table over a list field, one row per record.
///
/// An empty or missing list renders a visible placeholder block instead of
/// a headers-only table, and records a warning so tooling can surface the
/// gap.
pub fn record_table(
    ctx: &mut RenderContext<'_>,
    field: &str,
    noun: &str,
    columns: &[Column],
) -> Block {
    let records = ctx.list(field);
    if records.is_empty() {
        ctx.warn(RenderWarning::EmptyList {
            field: field.to_string(),
        });
        return Block::Placeholder {
            text: format!("No {noun} provided."),
        };
    }

    let headers = columns.iter().map(|column| column.header.clone()).collect();
    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| match column.kind {
                    ColumnKind::Text => Cell::text(record.display(&column.field)),
                    ColumnKind::Money => {
                        Cell::text(format_currency(record.float(&column.field)))
                    }
                    ColumnKind::Checkbox => Cell::from_inlines(vec![Inline::checkbox(
                        record.flag(&column.field),
                        "",
                    )]),
                })
                .collect()
        })
        .collect();
    Block::Table { headers, rows }
}

/// The sales-comparison grid: one feature row per `(label, field)` entry,
/// one column per comparable.
///
/// The grid leads with a sale-price row, renders each feature's raw value
/// with its adjustment delta beside it, and closes with the
/// total-adjustment and adjusted-price rows taken verbatim from the
/// records. Totals are trusted, not recomputed; reconciling them is the
/// appraiser's judgment call.
pub fn comparison_grid(rows: &[(&str, &str)], comparables: &[Comparable]) -> Block {
    let mut headers = vec!["Feature".to_string()];
    headers.extend(comparables.iter().map(|comp| comp.address.clone()));

    let mut body = Vec::new();

    let mut price = vec![Cell::text("Sale Price")];
    price.extend(
        comparables
            .iter()
            .map(|comp| Cell::text(format_currency(comp.sale_price))),
    );
    body.push(price);

    for (label, field) in rows {
        let mut cells = vec![Cell::text(*label)];
        cells.extend(comparables.iter().map(|comp| {
            adjustment_cell(&comp.feature_text(field), comp.adjustment_for(label))
        }));
        body.push(cells);
    }

    let mut totals = vec![Cell::text("Total Adjustments")];
    totals.extend(
        comparables
            .iter()
            .map(|comp| Cell::text(format_signed_currency(comp.total_adjustment))),
    );
    body.push(totals);

    let mut adjusted = vec![Cell::text("Adjusted Price")];
    adjusted.extend(
        comparables
            .iter()
            .map(|comp| Cell::text(format_currency(comp.adjusted_price))),
    );
    body.push(adjusted);

    Block::Table {
        headers,
        rows: body,
    }
}

/// `Label:  [x] Yes   [ ] No   [ ] Unknown` with exactly one box checked.
pub fn tristate_row(label: &str, state: TriState) -> Block {
    Block::Paragraph {
        inlines: vec![
            Inline::text(format!("{label}:  ")),
            Inline::checkbox(state == TriState::Yes, "Yes"),
            Inline::text("   "),
            Inline::checkbox(state == TriState::No, "No"),
            Inline::text("   "),
            Inline::checkbox(state == TriState::Unknown, "Unknown"),
        ],
    }
}

/// A `Label: $1,234` row. Missing amounts render the `---` placeholder.
pub fn labeled_amount(label: &str, amount: Option<f64>) -> Block {
    Block::Paragraph {
        inlines: vec![
            Inline::bold(format!("{label}: ")),
            Inline::text(format_currency(amount)),
        ],
    }
}

/// Signature and date lines for each `(role, name)` pair, in order.
pub fn signature_block(parties: &[(&str, &str)]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for (role, name) in parties {
        blocks.push(Block::Spacer);
        blocks.push(Block::SignatureLine {
            label: role.to_string(),
            name: name.to_string(),
        });
        blocks.push(Block::SignatureLine {
            label: "Date".to_string(),
            name: String::new(),
        });
    }
    blocks
}
