//! HTML id and name construction.
//!
//! Ids are always `[namespace_]object[_index]_field`, names always
//! `object[index][field]`. The namespace never reaches the name attribute.

use std::sync::LazyLock;

use regex::Regex;

static OBJECT_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\[|[^-a-zA-Z0-9:.]").unwrap());

static ID_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^-a-zA-Z0-9:.]").unwrap());

static VALUE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").unwrap());

static VALUE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^-\w]").unwrap());

/// Turns an object name such as `item[address]` into `item_address`.
pub fn sanitized_object_name(object_name: &str) -> String {
    let replaced = OBJECT_NAME_CHARS.replace_all(object_name, "_");
    match replaced.strip_suffix('_') {
        Some(trimmed) => trimmed.to_string(),
        None => replaced.into_owned(),
    }
}

/// Strips the predicate marker from a method name (`admin?` -> `admin`).
pub fn sanitized_method_name(field: &str) -> &str {
    field.strip_suffix('?').unwrap_or(field)
}

/// Builds the `id` attribute for a bound field.
pub fn field_id(
    object_name: &str,
    field: &str,
    namespace: Option<&str>,
    index: Option<&str>,
) -> String {
    let field = sanitized_method_name(field);
    let base = if object_name.is_empty() {
        field.to_string()
    } else {
        let object = sanitized_object_name(object_name);
        match index {
            Some(index) => format!("{object}_{index}_{field}"),
            None => format!("{object}_{field}"),
        }
    };

    match namespace {
        Some(namespace) => format!("{namespace}_{base}"),
        None => base,
    }
}

/// Builds the `name` attribute for a bound field.
///
/// `multiple` appends `[]` so the server receives every selected value.
pub fn field_name(object_name: &str, field: &str, index: Option<&str>, multiple: bool) -> String {
    let mut name = if object_name.is_empty() {
        field.to_string()
    } else {
        match index {
            Some(index) => format!("{object_name}[{index}][{field}]"),
            None => format!("{object_name}[{field}]"),
        }
    };
    if multiple {
        name.push_str("[]");
    }
    name
}

/// Turns a free-form tag name into an id (`user[email]` -> `user_email`).
pub fn sanitize_to_id(name: &str) -> String {
    ID_CHARS.replace_all(&name.replace(']', ""), "_").into_owned()
}

/// Turns a choice value into an id suffix for radio buttons.
pub fn sanitized_value(value: &str) -> String {
    let underscored = VALUE_WHITESPACE.replace_all(value, "_");
    VALUE_CHARS.replace_all(&underscored, "").to_lowercase()
}

/// Turns a field name into a human label (`owner_id` -> `Owner`).
pub fn humanize(field: &str) -> String {
    let field = sanitized_method_name(field);
    let field = field.strip_suffix("_id").unwrap_or(field);
    let lowered = field.replace('_', " ").trim().to_lowercase();

    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_combinations() {
        assert_eq!(field_id("item", "name", None, None), "item_name");
        assert_eq!(field_id("item", "name", Some("foo"), None), "foo_item_name");
        assert_eq!(field_id("item", "name", None, Some("69")), "item_69_name");
        assert_eq!(
            field_id("item", "name", Some("foo"), Some("69")),
            "foo_item_69_name"
        );
    }

    #[test]
    fn test_field_id_nested_object_name() {
        assert_eq!(
            field_id("item[address]", "street", None, None),
            "item_address_street"
        );
        assert_eq!(
            field_id("item[lines][]", "sku", None, None),
            "item_lines__sku"
        );
    }

    #[test]
    fn test_field_id_without_object_name() {
        assert_eq!(field_id("", "query", None, None), "query");
        assert_eq!(field_id("", "query", Some("nav"), None), "nav_query");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("item", "name", None, false), "item[name]");
        assert_eq!(field_name("item", "name", Some("69"), false), "item[69][name]");
        assert_eq!(field_name("item", "tags", None, true), "item[tags][]");
        assert_eq!(field_name("", "query", None, false), "query");
    }

    #[test]
    fn test_predicate_fields() {
        assert_eq!(field_id("user", "admin?", None, None), "user_admin");
        assert_eq!(humanize("admin?"), "Admin");
    }

    #[test]
    fn test_sanitize_to_id() {
        assert_eq!(sanitize_to_id("user[email]"), "user_email");
        assert_eq!(sanitize_to_id("search box"), "search_box");
        assert_eq!(sanitize_to_id("q"), "q");
    }

    #[test]
    fn test_sanitized_value() {
        assert_eq!(sanitized_value("Option A"), "option_a");
        assert_eq!(sanitized_value("1"), "1");
        assert_eq!(sanitized_value("a/b-c"), "ab-c");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize("owner_id"), "Owner");
        assert_eq!(humanize("HTML_body"), "Html body");
        assert_eq!(humanize(""), "");
    }
}
