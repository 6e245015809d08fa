//! Host form owning the submitted `start`/`end` values

use serde::{Deserialize, Serialize};

use crate::picker::Field;

/// The two text fields the picker is bound to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormValues {
    pub start: String,
    pub end: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Start => &self.start,
            Field::End => &self.end,
        }
    }

    /// Values serialized the way they are shown after a submit
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"start\":{:?},\"end\":{:?}}}", self.start, self.end))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    initial: FormValues,
    values: FormValues,
    last_submitted: Option<FormValues>,
}

impl FormState {
    pub fn new(initial: FormValues) -> Self {
        Self {
            values: initial.clone(),
            initial,
            last_submitted: None,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn last_submitted(&self) -> Option<&FormValues> {
        self.last_submitted.as_ref()
    }

    pub fn set_field_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Start => self.values.start = value,
            Field::End => self.values.end = value,
        }
    }

    /// Restore the initial values
    pub fn reset(&mut self) {
        log::info!("Form reset");
        self.values = self.initial.clone();
    }

    /// Record and return the current values
    pub fn submit(&mut self) -> FormValues {
        let submitted = self.values.clone();
        log::info!("Form submitted: {}", submitted.to_json());
        self.last_submitted = Some(submitted.clone());
        submitted
    }
}
