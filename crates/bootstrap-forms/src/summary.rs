//! Error message aggregation and the form-level error summary.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Li, Ul, H4};
use tracing::debug;

use crate::error::BASE_FIELD;
use crate::locale::Locale;
use crate::naming::humanize;
use crate::object::FormObject;

fn full_message(object: &dyn FormObject, locale: &Locale, field: &str, message: &str) -> String {
    if field == BASE_FIELD {
        message.to_string()
    } else {
        locale.full_message(&object.human_attribute_name(field), message)
    }
}

/// Returns every error on the object as a full message, such as
/// `Name is invalid`, in field order and then message order.
///
/// Objects without validation support have no errors to report.
pub fn aggregate(object: &dyn FormObject, locale: &Locale) -> Vec<String> {
    let Some(validation) = object.validation() else {
        return Vec::new();
    };

    validation
        .errors()
        .all_errors()
        .into_iter()
        .map(|(field, message)| full_message(object, locale, field, message))
        .collect()
}

/// Returns the full messages reported for one field.
pub fn full_messages_for(object: &dyn FormObject, locale: &Locale, field: &str) -> Vec<String> {
    let Some(messages) = object
        .validation()
        .and_then(|validation| validation.errors().get(field))
    else {
        return Vec::new();
    };

    messages
        .iter()
        .map(|message| full_message(object, locale, field, message))
        .collect()
}

/// Returns the name used for the object in headings and button labels.
pub fn display_name(object: Option<&dyn FormObject>, object_name: &str) -> String {
    object
        .and_then(|object| object.model_name())
        .unwrap_or_else(|| humanize(object_name))
}

/// Renders the alert block listing every error on the object.
///
/// Returns an empty string when there is nothing to report.
pub fn render_summary(object: Option<&dyn FormObject>, object_name: &str, locale: &Locale) -> String {
    let messages = object
        .map(|object| aggregate(object, locale))
        .unwrap_or_default();
    if messages.is_empty() {
        return String::new();
    }

    debug!(object_name, count = messages.len(), "rendering error summary");

    let heading = locale.errors_header(&display_name(object, object_name));

    Element::<Div>::new()
        .class("alert alert-block alert-error validation-errors")
        .child::<H4, _>(|h| h.class("alert-heading").text(&heading))
        .child::<Ul, _>(|ul| {
            ul.children(messages.iter(), |message, li: Element<Li>| li.text(message))
        })
        .render()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::object::Record;

    fn project_with_errors() -> Record {
        let mut project = Record::new("Project");
        project.errors_mut().add_invalid("name");
        project.errors_mut().add("base", "Project is archived");
        project.errors_mut().add("owner_id", "can't be blank");
        project
    }

    #[test]
    fn test_aggregate_order_and_format() {
        let project = project_with_errors();
        assert_eq!(
            aggregate(&project, &Locale::default()),
            vec![
                "Name is invalid".to_string(),
                "Project is archived".to_string(),
                "Owner can't be blank".to_string(),
            ]
        );
    }

    #[test]
    fn test_aggregate_empty() {
        let project = Record::new("Project");
        assert!(aggregate(&project, &Locale::default()).is_empty());

        let map: HashMap<String, String> = HashMap::new();
        assert!(aggregate(&map, &Locale::default()).is_empty());
    }

    #[test]
    fn test_aggregate_keeps_placeholders_in_attribute_names() {
        let mut record = Record::new("Project").human_name("x", "%{message} attr");
        record.errors_mut().add("x", "bad");
        assert_eq!(
            aggregate(&record, &Locale::default()),
            vec!["%{message} attr bad".to_string()]
        );
    }

    #[test]
    fn test_full_messages_for_field() {
        let project = project_with_errors();
        let locale = Locale::default();
        assert_eq!(
            full_messages_for(&project, &locale, "name"),
            vec!["Name is invalid".to_string()]
        );
        assert!(full_messages_for(&project, &locale, "description").is_empty());
    }

    #[test]
    fn test_render_summary_without_errors_is_empty() {
        let project = Record::new("Project");
        assert_eq!(render_summary(Some(&project), "item", &Locale::default()), "");
        assert_eq!(render_summary(None, "item", &Locale::default()), "");
    }

    #[test]
    fn test_render_summary_with_errors() {
        let mut project = Record::new("Project");
        project.errors_mut().add_invalid("name");

        let html = render_summary(Some(&project), "item", &Locale::default());
        assert!(html.starts_with(r#"<div class="alert alert-block alert-error validation-errors">"#));
        assert!(html.ends_with("</div>"));
        assert!(html.contains(r#"<h4 class="alert-heading">Your Project is invalid.</h4>"#));
        assert!(html.contains("<ul><li>Name is invalid</li></ul>"));
    }

    #[test]
    fn test_display_name_falls_back_to_object_name() {
        assert_eq!(display_name(None, "line_item"), "Line item");
        let project = Record::new("Project");
        assert_eq!(display_name(Some(&project), "item"), "Project");
    }
}
