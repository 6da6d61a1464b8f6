//! # bootstrap-forms
//!
//! Bootstrap form markup for objects backed by a validation engine.
//!
//! This crate provides:
//! - A form builder that wraps every field in a Bootstrap control group
//! - Label association and `[namespace_]object[_index]_field` ids
//! - `required="required"` for fields with an applicable presence validator
//! - Inline error messages and a form-level error summary
//! - Persistence-aware submit labels
//! - Tag helpers for forms without a bound object
//!
//! ## Quick Start
//!
//! ```rust
//! use bootstrap_forms::{FieldOptions, FormBuilder, Record};
//! use bootstrap_forms::validation::PresenceValidator;
//!
//! let mut project = Record::new("Project")
//!     .with_value("name", "Apollo")
//!     .validates("owner", PresenceValidator::new());
//! project.errors_mut().add_invalid("name");
//!
//! let builder = FormBuilder::new("item", Some(&project));
//!
//! let name = builder
//!     .text_field("name", &FieldOptions::new().error("This is an error!"))
//!     .unwrap();
//! assert!(name.contains("This is an error!, Name is invalid"));
//!
//! let owner = builder.text_field("owner", &FieldOptions::new()).unwrap();
//! assert!(owner.contains(r#"required="required""#));
//!
//! assert!(builder.error_messages().contains("<li>Name is invalid</li>"));
//! assert_eq!(builder.submit_label(), "Create Project");
//! ```
//!
//! ## Namespaces and Indexes
//!
//! ```rust
//! use bootstrap_forms::{BuilderOptions, FormBuilder};
//!
//! let builder = FormBuilder::new("item", None)
//!     .options(BuilderOptions::new().namespace("foo").index(69));
//! assert_eq!(builder.id_for("name"), "foo_item_69_name");
//! assert_eq!(builder.name_for("name", false), "item[69][name]");
//! ```
//!
//! ## Localization
//!
//! ```rust
//! use bootstrap_forms::{FormBuilder, Locale, Record};
//!
//! let locale = Locale::from_json(r#"{"submit_update": "Save changes to %{model}"}"#).unwrap();
//! let project = Record::new("Project").persisted();
//! let builder = FormBuilder::new("item", Some(&project)).locale(&locale);
//! assert_eq!(builder.submit_label(), "Save changes to Project");
//! ```

mod attrs;
mod builder;
mod error;
mod group;
mod labels;
mod locale;
pub mod naming;
mod object;
mod options;
mod summary;
pub mod tags;
pub mod validation;

pub use attrs::{html_escape, Attributes};
pub use builder::FormBuilder;
pub use error::{FormError, Result, ValidationErrors, BASE_FIELD};
pub use labels::submit_label;
pub use locale::Locale;
pub use object::{has_validation_support, FormObject, Record, Validated};
pub use options::{BuilderOptions, ControlState, FieldOptions, LabelText};
pub use summary::{aggregate, render_summary};
