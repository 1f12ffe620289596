//! # Prompt Template
//!
//! The fixed, topic-agnostic prompt a debater fills in every turn. Templates use
//! `{context}`, `{name}` and `{opponent_name}` slots; `{{` and `}}` stand for literal
//! braces. Templates are parsed once at load, so an unknown slot is a configuration
//! error rather than a mid-debate failure.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use serde::Deserialize;
use std::path::Path;

use crate::core::{DebateError, Result};

/// Template bundled with the crate, used when no file is supplied
pub const DEFAULT_TEMPLATE_YAML: &str = include_str!("../../../prompt/prompt_template.yaml");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Context,
    Name,
    OpponentName,
}

impl Slot {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "context" => Some(Slot::Context),
            "name" => Some(Slot::Name),
            "opponent_name" => Some(Slot::OpponentName),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Slot),
}

/// On-disk layout of a template file
#[derive(Debug, Deserialize)]
struct TemplateFile {
    #[serde(rename = "PROMPT_TEMPLATE")]
    prompt_template: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse a raw template string
    pub fn parse(raw: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    text.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    text.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(DebateError::config(format!(
                            "Unclosed placeholder '{{{name}' in prompt template"
                        )));
                    }
                    let slot = Slot::parse(&name).ok_or_else(|| {
                        DebateError::config(format!(
                            "Unknown placeholder '{{{name}}}' in prompt template"
                        ))
                    })?;
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Slot(slot));
                }
                '}' => {
                    return Err(DebateError::config(
                        "Single '}' in prompt template (use '}}' for a literal brace)",
                    ));
                }
                _ => text.push(c),
            }
        }
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(PromptTemplate { segments })
    }

    /// Parse a YAML document holding a `PROMPT_TEMPLATE` key
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: TemplateFile = serde_yaml::from_str(yaml)
            .map_err(|e| DebateError::config(format!("Invalid prompt template YAML: {e}")))?;
        Self::parse(&file.prompt_template)
    }

    /// Load a template from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DebateError::config(format!(
                "Failed to read prompt template {}: {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&contents)
    }

    /// The bundled debate template
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(DEFAULT_TEMPLATE_YAML)
    }

    pub fn render(&self, context: &str, name: &str, opponent_name: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(Slot::Context) => out.push_str(context),
                Segment::Slot(Slot::Name) => out.push_str(name),
                Segment::Slot(Slot::OpponentName) => out.push_str(opponent_name),
            }
        }
        out
    }
}
