//! Control group helpers for forms that are not bound to an object.
//!
//! These take a raw `name` attribute instead of an object and field. The
//! id is derived from the name; there is nothing to mark as required, but a
//! caller-supplied error still decorates the field.

use ironhtml::typed::Element;
use ironhtml_elements::Label;

use crate::attrs::{content_tag, void_tag, Attributes};
use crate::error::{FormError, Result};
use crate::group::{render_control_group, Control};
use crate::naming::{humanize, sanitize_to_id};
use crate::options::{FieldOptions, LabelText};

fn label_text(id: &str, options: &FieldOptions) -> Option<String> {
    match &options.label {
        LabelText::Default => Some(humanize(id)),
        LabelText::Custom(text) => Some(text.clone()),
        LabelText::Hidden => None,
    }
}

fn tag_attributes(name: &str) -> Result<(String, Attributes)> {
    if name.is_empty() {
        return Err(FormError::MissingField);
    }
    let id = sanitize_to_id(name);
    let attrs = Attributes::new().with("id", id.as_str()).with("name", name);
    Ok((id, attrs))
}

fn wrap(id: &str, input: String, label: Option<String>, options: &FieldOptions) -> String {
    let control = Control {
        id,
        label,
        input,
        errors: options.error.iter().cloned().collect(),
    };
    render_control_group(&control, options)
}

fn input_tag(name: &str, input_type: &str, value: Option<&str>, options: &FieldOptions) -> Result<String> {
    let (id, mut attrs) = tag_attributes(name)?;
    attrs.set("type", input_type);
    if let Some(value) = value {
        attrs.set("value", value);
    }
    attrs.merge(&options.html);

    let label = label_text(&id, options);
    Ok(wrap(&id, void_tag("input", &attrs), label, options))
}

/// Renders a text input tag in a control group.
pub fn bootstrap_text_field_tag(name: &str, value: Option<&str>, options: &FieldOptions) -> Result<String> {
    input_tag(name, "text", value, options)
}

/// Renders a password input tag in a control group.
pub fn bootstrap_password_field_tag(name: &str, options: &FieldOptions) -> Result<String> {
    input_tag(name, "password", None, options)
}

/// Renders an email input tag in a control group.
pub fn bootstrap_email_field_tag(name: &str, value: Option<&str>, options: &FieldOptions) -> Result<String> {
    input_tag(name, "email", value, options)
}

/// Renders a textarea tag in a control group.
pub fn bootstrap_text_area_tag(name: &str, content: Option<&str>, options: &FieldOptions) -> Result<String> {
    let (id, mut attrs) = tag_attributes(name)?;
    attrs.merge(&options.html);

    let label = label_text(&id, options);
    let textarea = content_tag("textarea", &attrs, content.unwrap_or_default());
    Ok(wrap(&id, textarea, label, options))
}

/// Renders a select tag with `(value, label)` choices.
pub fn bootstrap_select_tag(
    name: &str,
    choices: &[(&str, &str)],
    selected: Option<&str>,
    options: &FieldOptions,
) -> Result<String> {
    let (id, mut attrs) = tag_attributes(name)?;
    attrs.merge(&options.html);

    let option_tags: String = choices
        .iter()
        .map(|(value, text)| {
            let mut option_attrs = Attributes::new().with("value", *value);
            if selected == Some(*value) {
                option_attrs.set("selected", "selected");
            }
            content_tag("option", &option_attrs, text)
        })
        .collect();

    let select = format!("<select {}>{option_tags}</select>", attrs.to_html());
    let label = label_text(&id, options);
    Ok(wrap(&id, select, label, options))
}

/// Renders a checkbox tag inside its own label.
pub fn bootstrap_check_box_tag(name: &str, checked: bool, options: &FieldOptions) -> Result<String> {
    let (id, mut attrs) = tag_attributes(name)?;
    attrs.set("type", "checkbox");
    attrs.set("value", "1");
    if checked {
        attrs.set("checked", "checked");
    }
    attrs.merge(&options.html);

    let text = label_text(&id, options).unwrap_or_default();
    let labelled = Element::<Label>::new()
        .class("checkbox")
        .attr("for", id.as_str())
        .raw(void_tag("input", &attrs))
        .text(&text)
        .render();
    Ok(wrap(&id, labelled, None, options))
}

/// Renders the primary submit input.
pub fn bootstrap_submit_tag(value: &str) -> String {
    let attrs = Attributes::new()
        .with("class", "btn btn-primary")
        .with("name", "commit")
        .with("type", "submit")
        .with("value", value);
    void_tag("input", &attrs)
}
