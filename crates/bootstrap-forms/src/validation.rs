//! Validator metadata consulted while rendering.
//!
//! Validators here describe the rules a validation engine applies to a
//! field. The builder never runs them; it only reads their kind and options
//! to decide on markup such as `required="required"`.

use regex::Regex;
use serde::Deserialize;

/// The rule a validator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    /// Value must be present.
    Presence,
    /// Value must be blank.
    Absence,
    /// Value length must fall within bounds.
    Length,
    /// Value must match a pattern.
    Format,
    /// Value must be numeric.
    Numericality,
    /// Value must be one of a fixed set.
    Inclusion,
    /// Value must be accepted (terms of service checkboxes).
    Acceptance,
    /// Value must match its confirmation field.
    Confirmation,
}

/// Lifecycle context a validator is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationContext {
    /// Runs on every save.
    Save,
    /// Runs only when the object is first created.
    Create,
    /// Runs only when an already persisted object is updated.
    Update,
}

impl ValidationContext {
    /// Returns whether a validator restricted to this context applies to an
    /// object with the given persistence state.
    pub fn applies_to(self, persisted: bool) -> bool {
        match self {
            Self::Save => true,
            Self::Create => !persisted,
            Self::Update => persisted,
        }
    }
}

/// Options shared by all validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// The validator is guarded by an `if`/`unless` condition.
    pub conditional: bool,
    /// Restricts the validator to one lifecycle context.
    pub on: Option<ValidationContext>,
}

impl ValidatorOptions {
    /// Creates unconditional options that apply in every context.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Trait for field validator metadata.
pub trait Validator: Send + Sync {
    /// Returns the rule this validator enforces.
    fn kind(&self) -> ValidatorKind;

    /// Returns the validator's options.
    fn options(&self) -> &ValidatorOptions;

    /// Returns whether this validator makes the field required for an
    /// object with the given persistence state.
    ///
    /// Conditional validators are never trusted, since the condition cannot
    /// be evaluated at render time.
    fn requires_presence(&self, persisted: bool) -> bool {
        let options = self.options();
        self.kind() == ValidatorKind::Presence
            && !options.conditional
            && options.on.is_none_or(|on| on.applies_to(persisted))
    }
}

macro_rules! option_setters {
    ($ty:ty) => {
        impl $ty {
            /// Marks the validator as guarded by a condition.
            #[must_use]
            pub fn conditional(mut self) -> Self {
                self.options.conditional = true;
                self
            }

            /// Restricts the validator to a lifecycle context.
            #[must_use]
            pub fn on(mut self, context: ValidationContext) -> Self {
                self.options.on = Some(context);
                self
            }
        }
    };
}

/// Validator that requires a non-blank value.
#[derive(Debug, Clone, Default)]
pub struct PresenceValidator {
    options: ValidatorOptions,
}

impl PresenceValidator {
    /// Creates a new unconditional `PresenceValidator`.
    pub fn new() -> Self {
        Self::default()
    }
}

option_setters!(PresenceValidator);

impl Validator for PresenceValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Presence
    }

    fn options(&self) -> &ValidatorOptions {
        &self.options
    }
}

/// Validator that bounds the length of a value.
#[derive(Debug, Clone, Default)]
pub struct LengthValidator {
    /// Minimum length, inclusive.
    pub minimum: Option<usize>,
    /// Maximum length, inclusive.
    pub maximum: Option<usize>,
    options: ValidatorOptions,
}

impl LengthValidator {
    /// Creates a new `LengthValidator` with the given bounds.
    pub fn new(minimum: Option<usize>, maximum: Option<usize>) -> Self {
        Self {
            minimum,
            maximum,
            options: ValidatorOptions::new(),
        }
    }

    /// Creates a validator with only an upper bound.
    pub fn maximum(maximum: usize) -> Self {
        Self::new(None, Some(maximum))
    }
}

option_setters!(LengthValidator);

impl Validator for LengthValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Length
    }

    fn options(&self) -> &ValidatorOptions {
        &self.options
    }
}

/// Validator using a regex pattern.
#[derive(Debug, Clone)]
pub struct FormatValidator {
    pattern: Regex,
    options: ValidatorOptions,
}

impl FormatValidator {
    /// Creates a new `FormatValidator`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            options: ValidatorOptions::new(),
        })
    }

    /// Returns the pattern values must match.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

option_setters!(FormatValidator);

impl Validator for FormatValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Format
    }

    fn options(&self) -> &ValidatorOptions {
        &self.options
    }
}

/// Validator that restricts a value to a fixed set.
#[derive(Debug, Clone, Default)]
pub struct InclusionValidator {
    /// Accepted values.
    pub values: Vec<String>,
    options: ValidatorOptions,
}

impl InclusionValidator {
    /// Creates a new `InclusionValidator`.
    pub fn new(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            options: ValidatorOptions::new(),
        }
    }
}

option_setters!(InclusionValidator);

impl Validator for InclusionValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Inclusion
    }

    fn options(&self) -> &ValidatorOptions {
        &self.options
    }
}
