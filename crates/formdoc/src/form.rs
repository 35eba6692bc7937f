//! Form definitions and the render entry point.

use std::collections::BTreeSet;

use bon::Builder;

use crate::compose::{Document, RenderedSection};
use crate::engine::{FormError, RenderContext, RenderWarning};
use crate::schema::FieldSchema;
use crate::section::{LabelKind, SectionDef, select_sections};
use crate::types::InputMap;

/// One document type: a field schema plus an ordered section list.
///
/// A form is declarative data. Rendering walks the sections twice: a
/// selection pass evaluates every inclusion predicate and assigns
/// contiguous labels, then the body pass produces content with those
/// labels already published for cross-references.
///
/// # Example
///
/// ```
/// use formdoc::{fields, Block, FieldSchema, FieldSpec, Form, SectionDef};
///
/// let form = Form::builder()
///     .name("notice")
///     .title("NOTICE OF ENTRY")
///     .schema(FieldSchema::from_specs([FieldSpec::text("tenant_name")]))
///     .sections(vec![SectionDef::new("body", |ctx| {
///         vec![Block::text(format!(
///             "To: {}",
///             ctx.text_or("tenant_name", "[Tenant Name]")
///         ))]
///     })])
///     .build();
///
/// let input = fields! { "tenant_name" => "Jane Roe" };
/// let (document, warnings) = form.render(&input).unwrap();
/// assert!(document.to_string().contains("To: Jane Roe"));
/// assert!(warnings.is_empty());
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Form {
    /// Registry name, e.g. `"residential_lease"`.
    name: String,
    /// Printed document title.
    title: String,
    /// Word prefixed to lettered labels in headings, as in
    /// `"Addendum A - Pet Addendum"`.
    #[builder(default = "Addendum".to_string())]
    attachment_word: String,
    /// Field contracts for every input this form reads.
    #[builder(default)]
    schema: FieldSchema,
    /// Sections in canonical order. Order is fixed by the form author;
    /// input never reorders sections, it only includes or excludes them.
    sections: Vec<SectionDef>,
}

impl Form {
    /// Registry name of this form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Printed document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The field contracts this form declares.
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// The section definitions in canonical order.
    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }

    /// Validate the form definition without rendering.
    ///
    /// Catches schema problems (duplicate fields, contradictory defaults,
    /// empty enum sets) and duplicate section keys. Called by [`render`]
    /// before any content is produced.
    ///
    /// [`render`]: Form::render
    pub fn validate(&self) -> Result<(), FormError> {
        self.schema.validate(&self.name)?;
        let mut seen = BTreeSet::new();
        for section in &self.sections {
            if !seen.insert(section.key.as_str()) {
                return Err(FormError::DuplicateSection {
                    form: self.name.clone(),
                    key: section.key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Render one document from an input map.
    ///
    /// Fails only when the form definition itself is invalid. Input
    /// problems never fail the render; they degrade to defaults and
    /// placeholders and come back as warnings alongside the document.
    pub fn render(&self, input: &InputMap) -> Result<(Document, Vec<RenderWarning>), FormError> {
        self.validate()?;

        let mut ctx = RenderContext::new(input, &self.schema);

        // Selection runs to completion first so every label is published
        // before any body can ask for one.
        let selected = select_sections(&self.sections, &mut ctx);

        let mut sections = Vec::with_capacity(selected.len());
        for section in &selected {
            let blocks = (section.def.body)(&mut ctx);
            sections.push(RenderedSection {
                key: section.def.key.clone(),
                label: section.label.clone(),
                heading: self.heading_for(section.def, section.label.as_deref()),
                starts_new_page: section.def.page_break,
                blocks,
            });
        }

        let document = Document {
            form: self.name.clone(),
            title: self.title.clone(),
            sections,
        };
        Ok((document, ctx.take_warnings()))
    }

    /// Combine a section's assigned label with its title into the heading
    /// the renderer prints.
    fn heading_for(&self, def: &SectionDef, label: Option<&str>) -> Option<String> {
        match (def.label, label) {
            (LabelKind::Numbered, Some(label)) => match &def.title {
                Some(title) => Some(format!("{label}. {title}")),
                None => Some(format!("{label}.")),
            },
            (LabelKind::Lettered, Some(label)) => match &def.title {
                Some(title) => Some(format!("{} {label} - {title}", self.attachment_word)),
                None => Some(format!("{} {label}", self.attachment_word)),
            },
            _ => def.title.clone(),
        }
    }
}
