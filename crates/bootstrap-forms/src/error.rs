//! Error types for the form builder.

use thiserror::Error;

/// Field that carries object-level messages rather than per-attribute ones.
pub const BASE_FIELD: &str = "base";

/// Message recorded by [`ValidationErrors::add_invalid`].
pub const INVALID: &str = "is invalid";

/// Form builder errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A builder or tag helper was called without a field name.
    #[error("missing field name")]
    MissingField,

    /// An option value the builder cannot work with.
    #[error("invalid option {option}: {message}")]
    InvalidOption { option: String, message: String },

    /// A locale table failed to parse.
    #[error("failed to parse locale table: {0}")]
    Locale(#[from] serde_json::Error),
}

impl FormError {
    /// Creates an invalid option error.
    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }
}

/// Validation messages by field, as reported by the validation engine.
///
/// Fields keep the order in which they first received a message, and each
/// field keeps its messages in insertion order. Summaries and inline error
/// strings are built in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    /// Creates a new empty `ValidationErrors`.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field.to_string(), vec![message])),
        }
    }

    /// Adds the default "is invalid" message for a field.
    pub fn add_invalid(&mut self, field: &str) {
        self.add(field, INVALID);
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Removes every recorded error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the names of fields with errors, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns all errors as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in self.all_errors() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "can't be blank");
        errors.add("email", "is taken");
        errors.add("name", "is too short");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "email"]);
        assert_eq!(
            errors.all_errors(),
            vec![
                ("name", "can't be blank"),
                ("name", "is too short"),
                ("email", "is taken"),
            ]
        );
    }

    #[test]
    fn test_add_invalid() {
        let mut errors = ValidationErrors::new();
        errors.add_invalid("name");
        assert_eq!(errors.get("name"), Some(&["is invalid".to_string()][..]));
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_clear_and_display() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "is required");
        assert_eq!(errors.to_string(), "title: is required\n");

        errors.clear();
        assert!(errors.is_empty());
        assert_eq!(errors.to_string(), "");
    }

    #[test]
    fn test_invalid_option_message() {
        let err = FormError::invalid_option("namespace", "must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid option namespace: must not be empty"
        );
    }
}
