//! The object-bound form builder.
//!
//! A [`FormBuilder`] renders fields for one bound object. Every field is
//! wrapped in a Bootstrap control group; fields are marked `required` when
//! the object declares an applicable presence validator, and decorated with
//! their error messages when the object reports any. Objects without
//! validation support, and forms without an object, render plain fields.

use std::sync::LazyLock;

use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div, Label, A};
use tracing::debug;

use crate::attrs::{content_tag, void_tag, Attributes};
use crate::error::{FormError, Result};
use crate::group::{render_control_group, Control};
use crate::labels::submit_label;
use crate::locale::Locale;
use crate::naming::{field_id, field_name, humanize, sanitized_value};
use crate::object::{has_validation_support, FormObject};
use crate::options::{BuilderOptions, FieldOptions, LabelText};
use crate::summary::{full_messages_for, render_summary};

static DEFAULT_LOCALE: LazyLock<Locale> = LazyLock::new(Locale::default);

/// Input types that get the default `size="30"`.
const SIZED_TYPES: [&str; 6] = ["text", "password", "email", "tel", "search", "url"];

/// Input types that never echo the object's value back.
const VALUELESS_TYPES: [&str; 2] = ["password", "file"];

const CANCEL_HREF: &str = "javascript:history.go(-1)";

/// Renders Bootstrap form fields for a bound object.
pub struct FormBuilder<'a> {
    object_name: String,
    object: Option<&'a dyn FormObject>,
    options: BuilderOptions,
    locale: &'a Locale,
}

impl std::fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("object_name", &self.object_name)
            .field("has_object", &self.object.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder for `object_name`, optionally bound to an object.
    pub fn new(object_name: impl Into<String>, object: Option<&'a dyn FormObject>) -> Self {
        let object_name = object_name.into();
        match object {
            None => debug!(%object_name, "no bound object, rendering undecorated fields"),
            Some(object) if !has_validation_support(object) => {
                debug!(%object_name, "object has no validation support, rendering undecorated fields");
            }
            Some(_) => {}
        }

        Self {
            object_name,
            object,
            options: BuilderOptions::default(),
            locale: &DEFAULT_LOCALE,
        }
    }

    /// Sets builder-wide options.
    #[must_use]
    pub fn options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the locale table.
    #[must_use]
    pub fn locale(mut self, locale: &'a Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the object name.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Returns the bound object.
    pub fn object(&self) -> Option<&'a dyn FormObject> {
        self.object
    }

    /// Returns the builder-wide options.
    pub fn builder_options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Returns the generated id for a field.
    pub fn id_for(&self, field: &str) -> String {
        field_id(
            &self.object_name,
            field,
            self.options.namespace.as_deref(),
            self.options.index.as_deref(),
        )
    }

    /// Returns the generated name for a field.
    pub fn name_for(&self, field: &str, multiple: bool) -> String {
        field_name(
            &self.object_name,
            field,
            self.options.index.as_deref(),
            multiple,
        )
    }

    /// Returns whether the field has an applicable presence validator.
    pub fn is_required(&self, field: &str) -> bool {
        let Some(object) = self.object else {
            return false;
        };
        let Some(validation) = object.validation() else {
            return false;
        };
        let persisted = object.is_persisted();
        validation
            .validators_on(field)
            .iter()
            .any(|validator| validator.requires_presence(persisted))
    }

    /// Returns the messages shown next to a field: the caller's message
    /// first, then the object's full messages in their original order.
    pub fn errors_for(&self, field: &str, options: &FieldOptions) -> Vec<String> {
        let mut messages: Vec<String> = options.error.iter().cloned().collect();
        if let Some(object) = self.object {
            messages.extend(full_messages_for(object, self.locale, field));
        }
        messages
    }

    fn check(&self, field: &str) -> Result<()> {
        if field.is_empty() {
            return Err(FormError::MissingField);
        }
        self.options.validate()
    }

    fn value(&self, field: &str) -> Option<String> {
        self.object.and_then(|object| object.value(field))
    }

    fn label_text(&self, field: &str, options: &FieldOptions) -> Option<String> {
        match &options.label {
            LabelText::Default => Some(
                self.object
                    .map_or_else(|| humanize(field), |object| object.human_attribute_name(field)),
            ),
            LabelText::Custom(text) => Some(text.clone()),
            LabelText::Hidden => None,
        }
    }

    fn base_attributes(&self, field: &str, multiple: bool) -> Attributes {
        let mut attrs = Attributes::new()
            .with("id", self.id_for(field))
            .with("name", self.name_for(field, multiple));
        if self.is_required(field) {
            attrs.set("required", "required");
        }
        attrs
    }

    fn wrap(&self, field: &str, id: &str, input: String, label: Option<String>, options: &FieldOptions) -> String {
        let control = Control {
            id,
            label,
            input,
            errors: self.errors_for(field, options),
        };
        render_control_group(&control, options)
    }

    fn input_field(&self, field: &str, input_type: &str, options: &FieldOptions) -> Result<String> {
        self.check(field)?;

        let mut attrs = self.base_attributes(field, false).with("type", input_type);
        if SIZED_TYPES.contains(&input_type) {
            attrs.set("size", "30");
        }
        if !VALUELESS_TYPES.contains(&input_type) {
            if let Some(value) = self.value(field) {
                attrs.set("value", value);
            }
        }
        attrs.merge(&options.html);

        let id = self.id_for(field);
        let label = self.label_text(field, options);
        Ok(self.wrap(field, &id, void_tag("input", &attrs), label, options))
    }

    /// Renders a text input.
    pub fn text_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "text", options)
    }

    /// Renders a password input. The current value is never rendered.
    pub fn password_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "password", options)
    }

    /// Renders an email input.
    pub fn email_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "email", options)
    }

    /// Renders a telephone input.
    pub fn telephone_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "tel", options)
    }

    /// Renders a search input.
    pub fn search_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "search", options)
    }

    /// Renders a URL input.
    pub fn url_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "url", options)
    }

    /// Renders a number input.
    pub fn number_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "number", options)
    }

    /// Renders a range input.
    pub fn range_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "range", options)
    }

    /// Renders a file input.
    pub fn file_field(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.input_field(field, "file", options)
    }

    /// Renders a textarea holding the current value.
    pub fn text_area(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.check(field)?;

        let mut attrs = self
            .base_attributes(field, false)
            .with("cols", "40")
            .with("rows", "20");
        attrs.merge(&options.html);

        let content = self.value(field).unwrap_or_default();
        let id = self.id_for(field);
        let label = self.label_text(field, options);
        Ok(self.wrap(field, &id, content_tag("textarea", &attrs, &content), label, options))
    }

    /// Renders a select with `(value, label)` choices.
    ///
    /// The choice matching the object's current value is selected. A
    /// `multiple` HTML option switches the name to array notation.
    pub fn select(
        &self,
        field: &str,
        choices: &[(&str, &str)],
        include_blank: bool,
        options: &FieldOptions,
    ) -> Result<String> {
        self.check(field)?;

        let multiple = options.html.get("multiple").is_some();
        let mut attrs = self.base_attributes(field, multiple);
        attrs.merge(&options.html);

        let current = self.value(field);
        let mut option_tags = String::new();
        if include_blank {
            option_tags.push_str(&content_tag("option", &Attributes::new().with("value", ""), ""));
        }
        for (value, text) in choices {
            let mut option_attrs = Attributes::new().with("value", *value);
            if current.as_deref() == Some(*value) {
                option_attrs.set("selected", "selected");
            }
            option_tags.push_str(&content_tag("option", &option_attrs, text));
        }

        let select = format!("<select {}>{option_tags}</select>", attrs.to_html());
        let id = self.id_for(field);
        let label = self.label_text(field, options);
        Ok(self.wrap(field, &id, select, label, options))
    }

    /// Renders a checkbox inside its own label.
    ///
    /// A hidden `0` input precedes the checkbox so unchecked boxes are still
    /// submitted.
    pub fn check_box(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.check(field)?;

        let name = self.name_for(field, false);
        let hidden = Attributes::new()
            .with("name", name.as_str())
            .with("type", "hidden")
            .with("value", "0");

        let mut attrs = self
            .base_attributes(field, false)
            .with("type", "checkbox")
            .with("value", "1");
        if self.value(field).as_deref().is_some_and(is_truthy) {
            attrs.set("checked", "checked");
        }
        attrs.merge(&options.html);

        let id = self.id_for(field);
        let inputs = format!("{}{}", void_tag("input", &hidden), void_tag("input", &attrs));
        let text = self.label_text(field, options).unwrap_or_default();
        let labelled = Element::<Label>::new()
            .class("checkbox")
            .attr("for", id.as_str())
            .raw(&inputs)
            .text(&text)
            .render();

        Ok(self.wrap(field, &id, labelled, None, options))
    }

    /// Renders one radio button per `(value, label)` choice.
    pub fn radio_buttons(
        &self,
        field: &str,
        choices: &[(&str, &str)],
        options: &FieldOptions,
    ) -> Result<String> {
        self.check(field)?;
        if choices.is_empty() {
            return Err(FormError::invalid_option("choices", "radio buttons need at least one choice"));
        }

        let base_id = self.id_for(field);
        let current = self.value(field);
        let mut buttons = String::new();
        for (value, text) in choices {
            let id = format!("{base_id}_{}", sanitized_value(value));
            let mut attrs = self
                .base_attributes(field, false)
                .with("id", id.as_str())
                .with("type", "radio")
                .with("value", *value);
            if current.as_deref() == Some(*value) {
                attrs.set("checked", "checked");
            }
            attrs.merge(&options.html);

            buttons.push_str(
                &Element::<Label>::new()
                    .class("radio")
                    .attr("for", id.as_str())
                    .raw(void_tag("input", &attrs))
                    .text(*text)
                    .render(),
            );
        }

        let label = self.label_text(field, options);
        Ok(self.wrap(field, &base_id, buttons, label, options))
    }

    /// Renders the current value as read-only text.
    pub fn uneditable_input(&self, field: &str, options: &FieldOptions) -> Result<String> {
        self.check(field)?;

        let attrs = Attributes::new().with("class", "uneditable-input");
        let value = self.value(field).unwrap_or_default();
        let id = self.id_for(field);
        let label = self.label_text(field, options);
        Ok(self.wrap(field, &id, content_tag("span", &attrs, &value), label, options))
    }

    /// Returns the default submit label for the bound object.
    pub fn submit_label(&self) -> String {
        submit_label(self.object, &self.object_name, self.locale)
    }

    /// Renders the primary submit input.
    pub fn submit(&self, value: Option<&str>) -> String {
        let value = value.map_or_else(|| self.submit_label(), ToString::to_string);
        let attrs = Attributes::new()
            .with("class", "btn btn-primary")
            .with("name", "commit")
            .with("type", "submit")
            .with("value", value);
        void_tag("input", &attrs)
    }

    /// Renders a submit `<button>`.
    pub fn button(&self, value: Option<&str>) -> String {
        let value = value.map_or_else(|| self.submit_label(), ToString::to_string);
        Element::<Button>::new()
            .class("btn")
            .attr("name", "button")
            .attr("type", "submit")
            .text(&value)
            .render()
    }

    /// Renders a link back to the previous page.
    pub fn cancel(&self) -> String {
        Element::<A>::new()
            .class("btn cancel")
            .attr("href", CANCEL_HREF)
            .text(&self.locale.cancel)
            .render()
    }

    /// Renders the form actions bar.
    ///
    /// Without explicit content it holds the default submit and cancel.
    pub fn actions(&self, content: Option<&str>) -> String {
        let content = content.map_or_else(
            || format!("{} {}", self.submit(None), self.cancel()),
            ToString::to_string,
        );
        Element::<Div>::new()
            .class("form-actions")
            .raw(&content)
            .render()
    }

    /// Renders the error summary for the bound object.
    pub fn error_messages(&self) -> String {
        render_summary(self.object, &self.object_name, self.locale)
    }

    /// Returns a builder for a nested object, named `parent[child]`.
    ///
    /// The nested builder keeps this builder's namespace and locale.
    pub fn fields_for<'b>(&self, child: &str, object: Option<&'b dyn FormObject>) -> Result<FormBuilder<'b>>
    where
        'a: 'b,
    {
        self.check(child)?;

        let object_name = match &self.options.index {
            Some(index) => format!("{}[{index}][{child}]", self.object_name),
            None => format!("{}[{child}]", self.object_name),
        };
        let options = BuilderOptions {
            namespace: self.options.namespace.clone(),
            index: None,
        };

        Ok(FormBuilder::new(object_name, object)
            .options(options)
            .locale(self.locale))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "on" | "yes")
}
