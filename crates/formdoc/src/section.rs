//! Conditional sections: inclusion predicates, ordering, and labeling.
//!
//! Older templates computed section numbers with hand-written conditional
//! chains ("if pool and pets then 7 else 6 …") that drifted apart as flags
//! multiplied. Here a form declares an ordered list of sections, each with
//! a declarative predicate, and numbering is derived from the selection
//! result, so gaps and off-by-one labels cannot be expressed.

use crate::compose::Block;
use crate::engine::RenderContext;

/// Declarative inclusion predicate for one optional section.
///
/// Selection is recomputed per render from the input map; there is no
/// persisted state.
#[derive(Debug, Clone, PartialEq)]
pub enum Include {
    /// Required content, always emitted.
    Always,
    /// Included when a boolean field coerces to `true`.
    Flag(String),
    /// Included when a field holds a non-blank string or non-empty list.
    NonEmpty(String),
    /// Included when an enumerated field matches any of the given values.
    Equals { field: String, any_of: Vec<String> },
    /// Included when a year field predates a fixed legal threshold.
    ///
    /// A missing or malformed year reads as `0` and therefore includes the
    /// section: for threshold-triggered disclosures, omission is the only
    /// unsafe direction.
    YearBefore { field: String, threshold: i64 },
}

impl Include {
    /// Included when `field` coerces to `true`.
    pub fn flag(field: impl Into<String>) -> Self {
        Include::Flag(field.into())
    }

    /// Included when `field` holds a non-blank string or non-empty list.
    pub fn non_empty(field: impl Into<String>) -> Self {
        Include::NonEmpty(field.into())
    }

    /// Included when `field` matches any of `values`.
    pub fn equals<S: Into<String>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Include::Equals {
            field: field.into(),
            any_of: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Included when `field` predates `threshold`.
    pub fn year_before(field: impl Into<String>, threshold: i64) -> Self {
        Include::YearBefore {
            field: field.into(),
            threshold,
        }
    }

    /// Evaluate this predicate against the document's input.
    pub fn evaluate(&self, ctx: &mut RenderContext<'_>) -> bool {
        match self {
            Include::Always => true,
            Include::Flag(field) => ctx.flag(field),
            Include::NonEmpty(field) => ctx.raw(field).is_some_and(|v| v.is_non_empty()),
            Include::Equals { field, any_of } => {
                let value = ctx.choice(field);
                any_of.iter().any(|candidate| candidate == &value)
            }
            Include::YearBefore { field, threshold } => {
                ctx.year(field).unwrap_or(0) < *threshold
            }
        }
    }

    /// The input field this predicate reads, if any. Used by the linter.
    pub fn field(&self) -> Option<&str> {
        match self {
            Include::Always => None,
            Include::Flag(field)
            | Include::NonEmpty(field)
            | Include::Equals { field, .. }
            | Include::YearBefore { field, .. } => Some(field),
        }
    }
}

/// How an included section is labeled in the finished document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// No label (headers, signature blocks, unnumbered body text).
    None,
    /// Sequential `1, 2, 3, …` among included numbered sections.
    Numbered,
    /// Sequential `A, B, … Z, AA, …` among included lettered sections.
    Lettered,
}

/// A section body: pure content production over the render context.
pub type BodyFn = fn(&mut RenderContext<'_>) -> Vec<Block>;

/// One section of a form, in the author-defined canonical order.
///
/// ```
/// use formdoc::{Include, LabelKind, SectionDef};
///
/// let def = SectionDef::new("pets", |_ctx| Vec::new())
///     .titled("Pet Addendum")
///     .lettered()
///     .when(Include::Flag("has_pets".to_string()))
///     .on_new_page();
/// assert_eq!(def.label, LabelKind::Lettered);
/// ```
#[derive(Debug, Clone)]
pub struct SectionDef {
    /// Stable key for cross-references and tooling. Unique within a form.
    pub key: String,
    /// Heading text; labeled sections must have one.
    pub title: Option<String>,
    pub label: LabelKind,
    pub include: Include,
    /// Hint to the external renderer to start this section on a new page.
    pub page_break: bool,
    pub body: BodyFn,
}

impl SectionDef {
    /// A required, unlabeled section.
    pub fn new(key: impl Into<String>, body: BodyFn) -> Self {
        Self {
            key: key.into(),
            title: None,
            label: LabelKind::None,
            include: Include::Always,
            page_break: false,
            body,
        }
    }

    /// Set the heading text.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Number this section among its included numbered siblings.
    pub fn numbered(mut self) -> Self {
        self.label = LabelKind::Numbered;
        self
    }

    /// Letter this section among its included lettered siblings.
    pub fn lettered(mut self) -> Self {
        self.label = LabelKind::Lettered;
        self
    }

    /// Set the inclusion predicate.
    pub fn when(mut self, include: Include) -> Self {
        self.include = include;
        self
    }

    /// Ask the renderer to start this section on a fresh page.
    pub fn on_new_page(mut self) -> Self {
        self.page_break = true;
        self
    }
}

/// A section that survived selection, with its assigned label.
#[derive(Debug)]
pub struct SelectedSection<'f> {
    pub def: &'f SectionDef,
    /// `"1"`, `"2"`, … or `"A"`, `"B"`, … depending on the label kind.
    pub label: Option<String>,
}

/// Evaluate every predicate in author order and assign contiguous labels
/// to the included sections.
///
/// Numbered and lettered sequences run independently; each is gap-free
/// over the sections actually included, so a section's displayed number
/// shifts when an earlier optional sibling is excluded. Assigned labels
/// are also published on the context for cross-references before any body
/// runs.
pub fn select_sections<'f>(
    sections: &'f [SectionDef],
    ctx: &mut RenderContext<'_>,
) -> Vec<SelectedSection<'f>> {
    let mut selected = Vec::new();
    let mut next_number = 1usize;
    let mut next_letter = 0usize;

    for def in sections {
        if !def.include.evaluate(ctx) {
            continue;
        }
        let label = match def.label {
            LabelKind::None => None,
            LabelKind::Numbered => {
                let label = next_number.to_string();
                next_number += 1;
                Some(label)
            }
            LabelKind::Lettered => {
                let label = letter_label(next_letter);
                next_letter += 1;
                Some(label)
            }
        };
        if let Some(label) = &label {
            ctx.assign_label(def.key.clone(), label.clone());
        }
        selected.push(SelectedSection { def, label });
    }

    selected
}

/// The letter label for a zero-based index: `A` … `Z`, `AA`, `AB`, …
pub fn letter_label(index: usize) -> String {
    let mut remaining = index;
    let mut letters = Vec::new();
    loop {
        let digit = remaining.rem_euclid(26);
        letters.push(char::from(b'A' + digit as u8));
        if remaining < 26 {
            break;
        }
        remaining = remaining.div_euclid(26) - 1;
    }
    letters.into_iter().rev().collect()
}
