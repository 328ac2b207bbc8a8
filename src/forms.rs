//! Form Validation
//!
//! Required-field checks and touched/submitting bookkeeping shared by the
//! login, signup, create and edit forms.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ClientError, ClientResult};
use crate::models::{Credentials, SignupRequest, TodoFields};

/// Field name -> message, for every field that failed
pub type FieldErrors = BTreeMap<&'static str, String>;

/// A required field and the message shown when it is empty
pub type Required = (&'static str, &'static str);

/// Values of a form whose fields are all required strings
pub trait FormFields: Clone + Default {
    const REQUIRED: &'static [Required];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;
}

/// Emptiness is the only rule. Whitespace counts as a value.
pub fn validate<F: FormFields>(values: &F) -> FieldErrors {
    F::REQUIRED
        .iter()
        .filter(|(name, _)| values.field(name).map_or(true, str::is_empty))
        .map(|(name, message)| (*name, message.to_string()))
        .collect()
}

/// Refuse a submission with any empty required field
pub fn require<F: FormFields>(values: &F) -> ClientResult<()> {
    let errors = validate(values);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ClientError::Validation(errors))
    }
}

impl FormFields for Credentials {
    const REQUIRED: &'static [Required] = &[
        ("email", "Why not? Fill your Email Address!"),
        ("password", "Why not? Fill your Password!"),
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

impl FormFields for SignupRequest {
    const REQUIRED: &'static [Required] = &[
        ("firstName", "Why not? Fill your First Name!"),
        ("lastName", "Why not? Fill your Last Name!"),
        ("email", "Why not? Fill your Email Address!"),
        ("password", "Why not? Fill your Password!"),
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "firstName" => Some(&self.first_name),
            "lastName" => Some(&self.last_name),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "firstName" => Some(&mut self.first_name),
            "lastName" => Some(&mut self.last_name),
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

impl FormFields for TodoFields {
    const REQUIRED: &'static [Required] = &[
        ("title", "Why not? Fill your Todo Title!"),
        ("description", "Why not? Fill your Todo Description!"),
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "title" => Some(&mut self.title),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }
}

/// Ephemeral state of one open form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<F> {
    pub values: F,
    touched: BTreeSet<&'static str>,
    errors: FieldErrors,
    submit_attempted: bool,
    submitting: bool,
}

impl<F: FormFields> FormState<F> {
    pub fn new(values: F) -> Self {
        let errors = validate(&values);
        Self {
            values,
            touched: BTreeSet::new(),
            errors,
            submit_attempted: false,
            submitting: false,
        }
    }

    /// Update a field and re-run validation
    pub fn set(&mut self, name: &str, value: String) {
        if let Some(slot) = self.values.field_mut(name) {
            *slot = value;
            self.errors = validate(&self.values);
        }
    }

    pub fn blur(&mut self, name: &str) {
        if let Some((known, _)) = F::REQUIRED.iter().find(|(n, _)| *n == name) {
            self.touched.insert(*known);
        }
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// The error to display for a field, if it has been blurred or submitted
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(name) {
            self.errors.get(name).map(String::as_str)
        } else {
            None
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mark every field touched and validate. Returns the values to submit,
    /// or `None` when a field is empty or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<F> {
        self.submit_attempted = true;
        self.touched.extend(F::REQUIRED.iter().map(|(name, _)| *name));
        self.errors = validate(&self.values);
        if self.submitting || !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(self.values.clone())
    }

    /// A successful submit discards the form; a failed one keeps the values.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            *self = Self::new(F::default());
        } else {
            self.submitting = false;
        }
    }
}
