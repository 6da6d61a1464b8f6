//! Translatable strings used by the builder.
//!
//! The table is passed to builders explicitly, so rendering depends only on
//! its inputs. Templates use `%{key}` placeholders.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Deserialize;

use crate::error::Result;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%\{(\w+)\}").unwrap());

/// Strings for headings, button labels and full error messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Heading of the error summary. Placeholder: `model`.
    pub errors_header: String,
    /// Submit label for new objects. Placeholder: `model`.
    pub submit_create: String,
    /// Submit label for persisted objects. Placeholder: `model`.
    pub submit_update: String,
    /// Submit label for forms without an object. Placeholder: `model`.
    pub submit_save: String,
    /// Label of the cancel link.
    pub cancel: String,
    /// Full error message format. Placeholders: `attribute`, `message`.
    pub error_format: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            errors_header: "Your %{model} is invalid.".to_string(),
            submit_create: "Create %{model}".to_string(),
            submit_update: "Update %{model}".to_string(),
            submit_save: "Save %{model}".to_string(),
            cancel: "Cancel".to_string(),
            error_format: "%{attribute} %{message}".to_string(),
        }
    }
}

impl Locale {
    /// Parses a locale table from JSON.
    ///
    /// Keys missing from the document keep their English defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the error summary heading for a model.
    pub fn errors_header(&self, model: &str) -> String {
        interpolate(&self.errors_header, &[("model", model)])
    }

    /// Returns a full error message such as `Name is invalid`.
    pub fn full_message(&self, attribute: &str, message: &str) -> String {
        interpolate(
            &self.error_format,
            &[("attribute", attribute), ("message", message)],
        )
    }
}

/// Replaces `%{key}` placeholders with their values.
///
/// The template is scanned once; substituted values are never rescanned,
/// so a value containing `%{...}` is inserted verbatim. Unknown placeholders
/// are left as they are.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            values
                .iter()
                .find(|(key, _)| *key == &caps[1])
                .map_or_else(|| caps[0].to_string(), |(_, value)| (*value).to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let locale = Locale::default();
        assert_eq!(locale.errors_header("Project"), "Your Project is invalid.");
        assert_eq!(locale.full_message("Name", "is invalid"), "Name is invalid");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let locale = Locale::from_json(r#"{"submit_create": "Neues %{model}"}"#).unwrap();
        assert_eq!(locale.submit_create, "Neues %{model}");
        assert_eq!(locale.submit_update, "Update %{model}");
        assert_eq!(locale.cancel, "Cancel");
    }

    #[test]
    fn test_invalid_json() {
        let err = Locale::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse locale table"));
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("%{a} and %{b}", &[("a", "x"), ("b", "y")]),
            "x and y"
        );
        assert_eq!(interpolate("%{missing}", &[("a", "x")]), "%{missing}");
    }

    #[test]
    fn test_interpolated_values_are_not_rescanned() {
        let locale = Locale::default();
        assert_eq!(
            locale.full_message("%{message} attr", "bad"),
            "%{message} attr bad"
        );
        assert_eq!(
            interpolate("%{a}-%{b}", &[("a", "%{b}"), ("b", "%{a}")]),
            "%{b}-%{a}"
        );
    }
}
