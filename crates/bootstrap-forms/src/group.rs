//! Control group markup shared by the form builder and the tag helpers.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Label, Span, P};
use tracing::trace;

use crate::options::{ControlState, FieldOptions};

/// One field ready to be wrapped.
#[derive(Debug)]
pub(crate) struct Control<'a> {
    /// Id of the input, used for the label's `for` attribute.
    pub id: &'a str,
    /// Text of the `control-label`, if one is rendered.
    pub label: Option<String>,
    /// Rendered input markup.
    pub input: String,
    /// Caller and validation messages, caller first.
    pub errors: Vec<String>,
}

/// Joins error messages the way they appear next to a field.
pub(crate) fn error_string(errors: &[String]) -> String {
    errors.join(", ")
}

fn group_class(errors: &[String], options: &FieldOptions) -> String {
    let state = if errors.is_empty() {
        options.state
    } else {
        Some(ControlState::Error)
    };
    match state {
        Some(state) => format!("control-group {}", state.class()),
        None => "control-group".to_string(),
    }
}

fn with_add_ons(input: &str, options: &FieldOptions) -> String {
    let wrapper_class = match (&options.prepend, &options.append) {
        (None, None) => return input.to_string(),
        (Some(_), None) => "input-prepend",
        (None, Some(_)) => "input-append",
        (Some(_), Some(_)) => "input-prepend input-append",
    };
    let prepend = options.prepend.clone();
    let append = options.append.clone();

    Element::<Div>::new()
        .class(wrapper_class)
        .when(prepend.is_some(), |d| {
            d.child::<Span, _>(|s| s.class("add-on").text(prepend.as_deref().unwrap_or("")))
        })
        .raw(input)
        .when(append.is_some(), |d| {
            d.child::<Span, _>(|s| s.class("add-on").text(append.as_deref().unwrap_or("")))
        })
        .render()
}

fn controls_content(control: &Control<'_>, options: &FieldOptions) -> String {
    let mut html = with_add_ons(&control.input, options);

    let inline = if control.errors.is_empty() {
        options.help_inline.clone()
    } else {
        Some(error_string(&control.errors))
    };
    if let Some(text) = inline {
        html.push_str(
            &Element::<Span>::new()
                .class("help-inline")
                .text(&text)
                .render(),
        );
    }

    if let Some(text) = &options.help_block {
        html.push_str(&Element::<P>::new().class("help-block").text(text).render());
    }

    html
}

/// Wraps a control in `div.control-group` with its label, add-ons and help.
pub(crate) fn render_control_group(control: &Control<'_>, options: &FieldOptions) -> String {
    let content = controls_content(control, options);
    if !options.control_group {
        return content;
    }

    let class = group_class(&control.errors, options);
    trace!(id = control.id, class = %class, "rendering control group");

    let label = control.label.clone();
    Element::<Div>::new()
        .class(class.as_str())
        .when(label.is_some(), |d| {
            d.child::<Label, _>(|l| {
                l.class("control-label")
                    .attr("for", control.id)
                    .text(label.as_deref().unwrap_or(""))
            })
        })
        .child::<Div, _>(|c| c.class("controls").raw(&content))
        .render()
}
