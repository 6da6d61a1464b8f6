//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use bootstrap_forms::validation::PresenceValidator;
use bootstrap_forms::Record;

/// A new project whose `owner` must be present.
pub fn project() -> Record {
    Record::new("Project").validates("owner", PresenceValidator::new())
}

/// A new project with one "is invalid" error on `name`.
pub fn invalid_project() -> Record {
    let mut project = project();
    project.errors_mut().add_invalid("name");
    project
}

/// Every `(namespace, index, expected id)` combination for field `name`
/// of object `item`.
pub const ID_CASES: [(Option<&str>, Option<&str>, &str); 4] = [
    (None, None, "item_name"),
    (Some("foo"), None, "foo_item_name"),
    (None, Some("69"), "item_69_name"),
    (Some("foo"), Some("69"), "foo_item_69_name"),
];
