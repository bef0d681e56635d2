//! Per-field validation error collection.
//!
//! Request validation gathers every problem before rejecting a write, so the
//! client sees all invalid or missing fields in a single 400 response:
//!
//! ```json
//! { "title": ["This field is required."], "age_rating": ["..."] }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::ValidationErrors;

use crate::error::CoreError;

/// Message used for every required field that is absent from a payload.
pub const MSG_REQUIRED: &str = "This field is required.";

/// Mapping from field name to the human-readable messages raised for it.
///
/// Backed by a `BTreeMap` so serialized output has a stable field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Record [`MSG_REQUIRED`] against `field`.
    pub fn add_required(&mut self, field: &str) {
        self.add(field, MSG_REQUIRED);
    }

    /// Return `value` unchanged, recording a required-field error when it is `None`.
    pub fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.add_required(field);
        }
        value
    }

    /// Fold another collection into this one, keeping message order per field.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded, otherwise [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "{}", fields.join(", "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value ({}).", error.code),
                };
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
