//! Accessible form-field composition.
//!
//! A field wraps one input with an optional label, description and error
//! text. [`compose`] resolves the input's id, wires `aria-describedby` to the
//! description and error ids that are actually rendered, and hands the
//! resulting [`InputAttributes`] to a render callback so the caller builds the
//! input itself.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(0);

/// Size variant propagated from the field to its input.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Small,
    #[default]
    Default,
    Large,
}

impl InputSize {
    pub fn as_str(self) -> &'static str {
        match self {
            InputSize::Small => "small",
            InputSize::Default => "default",
            InputSize::Large => "large",
        }
    }
}

/// What the caller wants the field to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFieldDescriptor {
    pub label: Option<String>,
    pub label_hidden: bool,
    pub description: Option<String>,
    pub error_message: Option<String>,
    pub has_error: bool,
    pub size: InputSize,
    /// Caller-supplied id. Empty is treated as absent.
    pub id: Option<String>,
}

impl FormFieldDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_hidden(mut self, hidden: bool) -> Self {
        self.label_hidden = hidden;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn provided_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    fn shown_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    fn shown_error(&self) -> Option<&str> {
        if !self.has_error {
            return None;
        }
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }
}

/// One mounted field. Holds the id generated for it so the id stays the same
/// across re-renders of this instance.
#[derive(Debug, PartialEq, Eq)]
pub struct FormFieldInstance {
    generated_id: String,
}

impl FormFieldInstance {
    pub fn new() -> Self {
        let n = NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            generated_id: format!("field-{}", n),
        }
    }

    pub fn generated_id(&self) -> &str {
        &self.generated_id
    }
}

impl Default for FormFieldInstance {
    fn default() -> Self {
        Self::new()
    }
}

/// Attributes the field injects into its input.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputAttributes {
    pub id: String,
    /// Space-separated ids; never an empty string.
    pub aria_describedby: Option<String>,
    pub aria_invalid: bool,
    pub size: InputSize,
}

impl InputAttributes {
    /// The attributes as an HTML attribute list, with a leading space.
    pub fn to_html_attrs(&self) -> String {
        let mut out = format!(" id=\"{}\"", escape_html(&self.id));
        if let Some(described_by) = &self.aria_describedby {
            out.push_str(&format!(" aria-describedby=\"{}\"", escape_html(described_by)));
        }
        out.push_str(&format!(
            " aria-invalid=\"{}\" data-size=\"{}\"",
            self.aria_invalid,
            self.size.as_str()
        ));
        out
    }
}

/// A rendered piece of the field, in display order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldPart {
    Label {
        text: String,
        html_for: String,
        visually_hidden: bool,
        has_error: bool,
    },
    Description {
        id: String,
        text: String,
    },
    Input {
        markup: String,
    },
    Error {
        id: String,
        text: String,
    },
}

/// The composed field.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FormFieldLayout {
    pub size: InputSize,
    pub input: InputAttributes,
    pub parts: Vec<FieldPart>,
}

impl FormFieldLayout {
    pub fn label(&self) -> Option<&FieldPart> {
        self.parts.iter().find(|p| matches!(p, FieldPart::Label { .. }))
    }

    pub fn description(&self) -> Option<&FieldPart> {
        self.parts.iter().find(|p| matches!(p, FieldPart::Description { .. }))
    }

    pub fn error(&self) -> Option<&FieldPart> {
        self.parts.iter().find(|p| matches!(p, FieldPart::Error { .. }))
    }

    /// Minimal HTML for the field. Text is escaped; input markup is inserted
    /// as produced by the render callback.
    pub fn to_html(&self) -> String {
        let mut out = format!("<div class=\"form-field\" data-size=\"{}\">", self.size.as_str());
        for part in &self.parts {
            match part {
                FieldPart::Label {
                    text,
                    html_for,
                    visually_hidden,
                    has_error,
                } => {
                    let mut class = String::from("field-label");
                    if *visually_hidden {
                        class.push_str(" sr-only");
                    }
                    if *has_error {
                        class.push_str(" has-error");
                    }
                    out.push_str(&format!(
                        "<label for=\"{}\" class=\"{}\">{}</label>",
                        escape_html(html_for),
                        class,
                        escape_html(text)
                    ));
                }
                FieldPart::Description { id, text } => {
                    out.push_str(&format!(
                        "<p id=\"{}\" class=\"field-description\">{}</p>",
                        escape_html(id),
                        escape_html(text)
                    ));
                }
                FieldPart::Input { markup } => out.push_str(markup),
                FieldPart::Error { id, text } => {
                    out.push_str(&format!(
                        "<p id=\"{}\" class=\"field-error\" role=\"alert\">{}</p>",
                        escape_html(id),
                        escape_html(text)
                    ));
                }
            }
        }
        out.push_str("</div>");
        out
    }
}

/// Composes a field around the input produced by `render`.
pub fn compose<F>(
    descriptor: &FormFieldDescriptor,
    instance: &FormFieldInstance,
    render: F,
) -> FormFieldLayout
where
    F: FnOnce(&InputAttributes) -> String,
{
    let id = descriptor
        .provided_id()
        .unwrap_or(instance.generated_id())
        .to_string();

    let description = descriptor.shown_description();
    let error = descriptor.shown_error();
    let description_id = description.map(|_| format!("{}-description", id));
    let error_id = error.map(|_| format!("{}-error", id));

    let described_by: Vec<&str> = [description_id.as_deref(), error_id.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    let aria_describedby = if described_by.is_empty() {
        None
    } else {
        Some(described_by.join(" "))
    };

    let input = InputAttributes {
        id: id.clone(),
        aria_describedby,
        aria_invalid: descriptor.has_error,
        size: descriptor.size,
    };

    let mut parts = Vec::with_capacity(4);
    if let Some(label) = descriptor.label.as_deref().filter(|l| !l.is_empty()) {
        parts.push(FieldPart::Label {
            text: label.to_string(),
            html_for: id.clone(),
            visually_hidden: descriptor.label_hidden,
            has_error: descriptor.has_error,
        });
    }
    if let (Some(text), Some(desc_id)) = (description, &description_id) {
        if !descriptor.label_hidden {
            parts.push(FieldPart::Description {
                id: desc_id.clone(),
                text: text.to_string(),
            });
        }
    }
    parts.push(FieldPart::Input {
        markup: render(&input),
    });
    if let (Some(text), Some(err_id)) = (error, &error_id) {
        parts.push(FieldPart::Error {
            id: err_id.clone(),
            text: text.to_string(),
        });
    }

    FormFieldLayout {
        size: descriptor.size,
        input,
        parts,
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
