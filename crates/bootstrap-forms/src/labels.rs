//! Persistence-aware submit labels.

use crate::locale::{interpolate, Locale};
use crate::object::FormObject;
use crate::summary::display_name;

/// Returns the default label for a form's submit button.
///
/// A persisted object gets "Update <Model>", a new one "Create <Model>".
/// Forms without an object get "Save <Object name>".
pub fn submit_label(object: Option<&dyn FormObject>, object_name: &str, locale: &Locale) -> String {
    let template = match object {
        Some(object) if object.is_persisted() => &locale.submit_update,
        Some(_) => &locale.submit_create,
        None => &locale.submit_save,
    };
    let model = display_name(object, object_name);
    interpolate(template, &[("model", model.as_str())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Record;

    #[test]
    fn test_new_and_persisted_objects() {
        let locale = Locale::default();
        for model in ["Project", "Line item", "User"] {
            let new = Record::new(model);
            assert_eq!(submit_label(Some(&new), "item", &locale), format!("Create {model}"));

            let saved = Record::new(model).persisted();
            assert_eq!(submit_label(Some(&saved), "item", &locale), format!("Update {model}"));
        }
    }

    #[test]
    fn test_without_object() {
        assert_eq!(
            submit_label(None, "line_item", &Locale::default()),
            "Save Line item"
        );
    }

    #[test]
    fn test_map_object_is_never_persisted() {
        let map = std::collections::BTreeMap::<String, String>::new();
        assert_eq!(
            submit_label(Some(&map), "search", &Locale::default()),
            "Create Search"
        );
    }
}
