//! Bound objects: the records a form renders.
//!
//! A bound object only has to expose field values. Objects that are backed
//! by a validation engine additionally expose [`Validated`] through
//! [`FormObject::validation`]; the builder checks for that capability before
//! it decorates fields as required or invalid.

use std::collections::{BTreeMap, HashMap};

use crate::error::ValidationErrors;
use crate::naming::humanize;
use crate::validation::Validator;

/// A record a form builder can render.
pub trait FormObject {
    /// Returns the current value of a field, if any.
    fn value(&self, field: &str) -> Option<String>;

    /// Returns the human-readable model name, such as `Project`.
    fn model_name(&self) -> Option<String> {
        None
    }

    /// Returns the human-readable name of a field.
    fn human_attribute_name(&self, field: &str) -> String {
        humanize(field)
    }

    /// Returns whether the object has been saved before.
    fn is_persisted(&self) -> bool {
        false
    }

    /// Returns the object's validation capability, if it has one.
    fn validation(&self) -> Option<&dyn Validated> {
        None
    }
}

/// Validation metadata and current errors of a bound object.
pub trait Validated {
    /// Returns the validators declared on a field.
    fn validators_on(&self, field: &str) -> Vec<&dyn Validator>;

    /// Returns the errors reported by the last validation run.
    fn errors(&self) -> &ValidationErrors;
}

/// Returns whether the object exposes validators and errors.
pub fn has_validation_support(object: &dyn FormObject) -> bool {
    object.validation().is_some()
}

/// A general-purpose bound object with validation support.
///
/// `Record` is what an application hands to the builder when its model does
/// not implement [`FormObject`] itself: a model name, the current values, the
/// persistence flag, declared validators and the engine's latest errors.
#[derive(Default)]
pub struct Record {
    model_name: String,
    values: BTreeMap<String, String>,
    persisted: bool,
    validators: HashMap<String, Vec<Box<dyn Validator>>>,
    errors: ValidationErrors,
    human_names: HashMap<String, String>,
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("model_name", &self.model_name)
            .field("values", &self.values)
            .field("persisted", &self.persisted)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl Record {
    /// Creates a new, unsaved record.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            ..Default::default()
        }
    }

    /// Sets a field value.
    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_value(field, value);
        self
    }

    /// Marks the record as persisted.
    #[must_use]
    pub fn persisted(mut self) -> Self {
        self.persisted = true;
        self
    }

    /// Declares a validator on a field.
    #[must_use]
    pub fn validates(mut self, field: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.validators
            .entry(field.into())
            .or_default()
            .push(Box::new(validator));
        self
    }

    /// Overrides the human name of a field.
    #[must_use]
    pub fn human_name(mut self, field: impl Into<String>, name: impl Into<String>) -> Self {
        self.human_names.insert(field.into(), name.into());
        self
    }

    /// Sets a field value in place.
    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Sets the persistence flag in place.
    pub fn set_persisted(&mut self, persisted: bool) {
        self.persisted = persisted;
    }

    /// Gives mutable access to the errors, for the validation engine.
    pub fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }
}

impl FormObject for Record {
    fn value(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }

    fn model_name(&self) -> Option<String> {
        Some(self.model_name.clone())
    }

    fn human_attribute_name(&self, field: &str) -> String {
        self.human_names
            .get(field)
            .cloned()
            .unwrap_or_else(|| humanize(field))
    }

    fn is_persisted(&self) -> bool {
        self.persisted
    }

    fn validation(&self) -> Option<&dyn Validated> {
        Some(self)
    }
}

impl Validated for Record {
    fn validators_on(&self, field: &str) -> Vec<&dyn Validator> {
        self.validators
            .get(field)
            .map(|validators| validators.iter().map(|validator| validator.as_ref()).collect())
            .unwrap_or_default()
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

impl FormObject for HashMap<String, String> {
    fn value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

impl FormObject for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{LengthValidator, PresenceValidator, ValidatorKind};

    #[test]
    fn test_record_values_and_flags() {
        let record = Record::new("Project")
            .with_value("name", "Apollo")
            .persisted();

        assert_eq!(record.value("name"), Some("Apollo".to_string()));
        assert_eq!(record.value("owner"), None);
        assert_eq!(record.model_name(), Some("Project".to_string()));
        assert!(record.is_persisted());
        assert!(has_validation_support(&record));
    }

    #[test]
    fn test_record_validators_on() {
        let record = Record::new("Project")
            .validates("owner", PresenceValidator::new())
            .validates("owner", LengthValidator::maximum(40));

        let kinds: Vec<_> = record
            .validators_on("owner")
            .iter()
            .map(|v| v.kind())
            .collect();
        assert_eq!(kinds, vec![ValidatorKind::Presence, ValidatorKind::Length]);
        assert!(record.validators_on("name").is_empty());
    }

    #[test]
    fn test_record_human_names() {
        let record = Record::new("Project").human_name("owner_id", "Project lead");
        assert_eq!(record.human_attribute_name("owner_id"), "Project lead");
        assert_eq!(record.human_attribute_name("due_on"), "Due on");
    }

    #[test]
    fn test_maps_have_no_validation_support() {
        let mut map = HashMap::new();
        map.insert("name".to_string(), "value".to_string());

        assert!(!has_validation_support(&map));
        assert_eq!(FormObject::value(&map, "name"), Some("value".to_string()));
        assert_eq!(map.model_name(), None);
        assert!(!map.is_persisted());
    }
}
