//! Builder-wide and per-field options.

use serde::Deserialize;

use crate::attrs::Attributes;
use crate::error::{FormError, Result};

/// Options that apply to every field a builder renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Prefix for every generated id, for pages that render the same form
    /// more than once.
    pub namespace: Option<String>,
    /// Position of the object in a collection-backed form.
    pub index: Option<String>,
}

impl BuilderOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the collection index.
    #[must_use]
    pub fn index(mut self, index: impl ToString) -> Self {
        self.index = Some(index.to_string());
        self
    }

    /// Checks that the options can produce well-formed ids and names.
    pub fn validate(&self) -> Result<()> {
        if self.namespace.as_deref().is_some_and(str::is_empty) {
            return Err(FormError::invalid_option("namespace", "must not be empty"));
        }
        if self.index.as_deref().is_some_and(str::is_empty) {
            return Err(FormError::invalid_option("index", "must not be empty"));
        }
        Ok(())
    }
}

/// How a field's label is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LabelText {
    /// The object's human attribute name.
    #[default]
    Default,
    /// Caller-supplied text.
    Custom(String),
    /// No label element at all.
    Hidden,
}

/// Visual state of a control group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// Field has errors.
    Error,
    /// Field passed a check.
    Success,
    /// Field needs attention.
    Warning,
    /// Field carries extra information.
    Info,
}

impl ControlState {
    /// Returns the CSS class added to the control group.
    pub fn class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Options for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOptions {
    /// Caller-supplied error message, shown before validation errors.
    pub error: Option<String>,
    /// Label rendering.
    pub label: LabelText,
    /// Inline help, shown when there are no errors.
    pub help_inline: Option<String>,
    /// Block help below the input.
    pub help_block: Option<String>,
    /// Add-on text before the input.
    pub prepend: Option<String>,
    /// Add-on text after the input.
    pub append: Option<String>,
    /// State class for the control group. Errors always win.
    pub state: Option<ControlState>,
    /// Whether to wrap the field in a control group.
    pub control_group: bool,
    /// Extra HTML attributes for the input itself.
    pub html: Attributes,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            error: None,
            label: LabelText::Default,
            help_inline: None,
            help_block: None,
            prepend: None,
            append: None,
            state: None,
            control_group: true,
            html: Attributes::new(),
        }
    }
}

impl FieldOptions {
    /// Creates default field options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a caller-supplied error message.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Sets custom label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = LabelText::Custom(text.into());
        self
    }

    /// Suppresses the label.
    #[must_use]
    pub fn no_label(mut self) -> Self {
        self.label = LabelText::Hidden;
        self
    }

    /// Sets inline help text.
    #[must_use]
    pub fn help_inline(mut self, text: impl Into<String>) -> Self {
        self.help_inline = Some(text.into());
        self
    }

    /// Sets block help text.
    #[must_use]
    pub fn help_block(mut self, text: impl Into<String>) -> Self {
        self.help_block = Some(text.into());
        self
    }

    /// Sets the prepended add-on.
    #[must_use]
    pub fn prepend(mut self, text: impl Into<String>) -> Self {
        self.prepend = Some(text.into());
        self
    }

    /// Sets the appended add-on.
    #[must_use]
    pub fn append(mut self, text: impl Into<String>) -> Self {
        self.append = Some(text.into());
        self
    }

    /// Sets the control group state.
    #[must_use]
    pub fn state(mut self, state: ControlState) -> Self {
        self.state = Some(state);
        self
    }

    /// Renders the bare input without a control group.
    #[must_use]
    pub fn without_control_group(mut self) -> Self {
        self.control_group = false;
        self
    }

    /// Sets an HTML attribute on the input.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.html.set(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_options_from_json() {
        let options: BuilderOptions =
            serde_json::from_str(r#"{"namespace": "foo", "index": "69"}"#).unwrap();
        assert_eq!(options, BuilderOptions::new().namespace("foo").index(69));
    }

    #[test]
    fn test_builder_options_validate() {
        assert!(BuilderOptions::new().validate().is_ok());
        assert!(BuilderOptions::new().namespace("").validate().is_err());
        assert!(BuilderOptions::new().index("").validate().is_err());
    }

    #[test]
    fn test_field_options_builder() {
        let options = FieldOptions::new()
            .error("This is an error!")
            .label("Project name")
            .help_block("Shown on the dashboard")
            .prepend("@")
            .attr("placeholder", "Apollo");

        assert_eq!(options.error.as_deref(), Some("This is an error!"));
        assert_eq!(options.label, LabelText::Custom("Project name".to_string()));
        assert_eq!(options.prepend.as_deref(), Some("@"));
        assert!(options.control_group);
        assert_eq!(
            options.html.get("placeholder").map(String::as_str),
            Some("Apollo")
        );
    }

    #[test]
    fn test_state_classes() {
        assert_eq!(ControlState::Error.class(), "error");
        assert_eq!(ControlState::Info.class(), "info");
    }
}
