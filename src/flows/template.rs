//! `{{field}}` prompt templates.
//!
//! A template is compiled once against the field names of its request type,
//! so a misspelt placeholder fails at startup instead of leaking into a prompt.
//! Rendering is a pure substitution: no I/O, no escaping, identical output for
//! identical input.

use regex::Regex;
use std::marker::PhantomData;

/// Named string values a template can reference.
pub trait PromptFields {
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("template `{template}` references unknown field `{field}`")]
    UnknownField {
        template: &'static str,
        field: String,
    },
    #[error("template `{template}` has an unterminated placeholder")]
    Unterminated { template: &'static str },
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Field(&'static str),
}

#[derive(Debug, Clone)]
pub struct PromptTemplate<F> {
    name: &'static str,
    segments: Vec<Segment>,
    _fields: PhantomData<fn(&F)>,
}

impl<F: PromptFields> PromptTemplate<F> {
    pub fn compile(name: &'static str, source: &str) -> Result<Self, TemplateError> {
        let placeholder =
            Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder regex");

        let mut segments = Vec::new();
        let mut cursor = 0;
        for captures in placeholder.captures_iter(source) {
            let (Some(whole), Some(field)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            Self::push_literal(name, &mut segments, &source[cursor..whole.start()])?;

            let field = F::FIELDS
                .iter()
                .copied()
                .find(|known| *known == field.as_str())
                .ok_or_else(|| TemplateError::UnknownField {
                    template: name,
                    field: field.as_str().to_string(),
                })?;
            segments.push(Segment::Field(field));
            cursor = whole.end();
        }
        Self::push_literal(name, &mut segments, &source[cursor..])?;

        Ok(Self {
            name,
            segments,
            _fields: PhantomData,
        })
    }

    fn push_literal(
        name: &'static str,
        segments: &mut Vec<Segment>,
        text: &str,
    ) -> Result<(), TemplateError> {
        if text.contains("{{") {
            return Err(TemplateError::Unterminated { template: name });
        }
        if !text.is_empty() {
            segments.push(Segment::Literal(text.to_string()));
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Placeholders in order of appearance.
    pub fn fields(&self) -> Vec<&'static str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Field(name) => Some(*name),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    pub fn render(&self, values: &F) -> String {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Field(name) => rendered.push_str(values.field(name).unwrap_or_default()),
            }
        }
        rendered
    }
}
