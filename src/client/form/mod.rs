//! Declarative form validation and submission state.
//!
//! Each form declares its fields and their [`FieldRule`]s once through
//! [`FormSchema`]. [`FormState`] wraps the field values with the bookkeeping
//! every form needs: which fields have been touched, the current field
//! errors, whether a submit is in flight, and the last submit failure.
//!
//! Submitting is split in two so that no borrow of the state is held across
//! the request: [`FormState::begin_submit`] validates and hands back a copy of
//! the values, and [`FormState::finish`] records the outcome.

pub mod cafe;
pub mod coffee;
pub mod login;
pub mod note;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use dioxus_logger::tracing;

use crate::client::error::Error;

/// A single constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    /// Fails on blank text or a missing number.
    Required(&'static str),
    /// Fails when trimmed text is longer than the given number of characters.
    MaxLength(usize, &'static str),
    /// Fails when a present number is below the bound.
    Min(i64, &'static str),
    /// Fails when a present number is above the bound.
    Max(i64, &'static str),
}

/// Borrowed view of a field value as the rules see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(Option<i64>),
}

impl FieldRule {
    pub fn check(&self, value: FieldValue<'_>) -> Result<(), &'static str> {
        match (*self, value) {
            (Self::Required(message), FieldValue::Text(text)) if text.trim().is_empty() => {
                Err(message)
            }
            (Self::Required(message), FieldValue::Number(None)) => Err(message),
            (Self::MaxLength(max, message), FieldValue::Text(text))
                if text.trim().chars().count() > max =>
            {
                Err(message)
            }
            (Self::Min(min, message), FieldValue::Number(Some(number))) if number < min => {
                Err(message)
            }
            (Self::Max(max, message), FieldValue::Number(Some(number))) if number > max => {
                Err(message)
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub rules: &'static [FieldRule],
}

impl FieldSchema {
    /// Returns the message of the first failing rule.
    pub fn check(&self, value: FieldValue<'_>) -> Option<&'static str> {
        self.rules.iter().find_map(|rule| rule.check(value).err())
    }
}

/// Field values of a form together with their validation schema.
pub trait FormSchema: Clone + Default + PartialEq + 'static {
    /// Name used in log messages
    const NAME: &'static str;
    const FIELDS: &'static [FieldSchema];

    fn value(&self, field: &str) -> FieldValue<'_>;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        for field in Self::FIELDS {
            if let Some(message) = field.check(self.value(field.name)) {
                errors.insert(field.name, message);
            }
        }
        errors
    }
}

/// Field name to error message, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<F: FormSchema> {
    pub values: F,
    touched: BTreeSet<&'static str>,
    errors: FormErrors,
    submitting: bool,
    submit_error: Option<String>,
}

impl<F: FormSchema> FormState<F> {
    pub fn new(values: F) -> Self {
        Self {
            values,
            touched: BTreeSet::new(),
            errors: FormErrors::default(),
            submitting: false,
            submit_error: None,
        }
    }

    /// Applies an edit to the values and revalidates.
    pub fn update(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.values);
        self.submit_error = None;
        self.errors = self.values.validate();
    }

    /// Marks a field as touched so its error becomes visible.
    pub fn blur(&mut self, field: &str) {
        if let Some(schema) = F::FIELDS.iter().find(|schema| schema.name == field) {
            self.touched.insert(schema.name);
        }
        self.errors = self.values.validate();
    }

    /// Error for a field, only once the field has been touched.
    pub fn error(&self, field: &str) -> Option<&str> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validates every field and, if valid, marks the form as submitting.
    ///
    /// # Returns
    /// - `Ok(F)` - Copy of the values to serialize and send
    /// - `Err(FormErrors)` - At least one field failed; nothing should be sent
    pub fn begin_submit(&mut self) -> Result<F, FormErrors> {
        self.begin_submit_with(|_, _| {})
    }

    /// Like [`FormState::begin_submit`] with additional checks that need
    /// data from outside the form.
    pub fn begin_submit_with(
        &mut self,
        extra: impl FnOnce(&F, &mut FormErrors),
    ) -> Result<F, FormErrors> {
        self.submit_error = None;
        self.touched.extend(F::FIELDS.iter().map(|field| field.name));

        let mut errors = self.values.validate();
        extra(&self.values, &mut errors);
        self.errors = errors;

        if !self.errors.is_empty() {
            tracing::debug!(
                "Not submitting {}: {}",
                F::NAME,
                Error::from(self.errors.clone())
            );
            return Err(self.errors.clone());
        }

        self.submitting = true;
        Ok(self.values.clone())
    }

    /// Records the outcome of a submit started with [`FormState::begin_submit`].
    ///
    /// On success the form is reset when `reset` is set. On failure the error
    /// is logged and a generic message is kept for display.
    pub fn finish<T>(&mut self, result: &Result<T, Error>, reset: bool) {
        self.submitting = false;

        match result {
            Ok(_) => {
                if reset {
                    self.reset();
                }
            }
            Err(err) => {
                tracing::error!("Failed to save {}: {}", F::NAME, err);
                self.submit_error = Some(err.user_message());
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(F::default());
    }
}
