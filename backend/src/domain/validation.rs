//! Field-level validation error collection.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::domain::Error;

/// Field name to messages, in field-name order.
///
/// Mirrors the model-state dictionaries web clients expect: every failing
/// field maps to all of its messages, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Register a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages registered for `field`.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Return `value` if no errors were registered, otherwise `self`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::invalid_request("One or more validation errors occurred.").with_details(json!({
            "code": "validation_failed",
            "fields": errors,
        }))
    }
}
