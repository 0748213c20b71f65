// SPDX-License-Identifier: MPL-2.0
//! Form field record and the identifiers used to address it.

use crate::submission::FormContents;

/// Identifies one of the three text fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// Returns all field variants for iteration.
    pub const fn all() -> &'static [FormField] {
        &[FormField::Name, FormField::Email, FormField::Message]
    }
}

/// The in-memory record of the form: the three text fields plus the
/// submission-in-progress flag.
///
/// The text attributes are always present strings; `submitting` is true
/// only between a submit request and its completion message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
}

impl FormState {
    /// Creates an empty, idle form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces exactly one field's value, leaving the other two untouched.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// Returns the current value of the addressed field.
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Sets all three text fields back to empty strings.
    /// `submitting` is owned by the submission handler and is not touched.
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Returns whether every required field has a non-blank value.
    ///
    /// This is the only validation the form performs; field formats are
    /// the endpoint's concern.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        FormField::all()
            .iter()
            .all(|field| !self.field(*field).trim().is_empty())
    }

    /// Takes a snapshot of the text fields for delivery.
    #[must_use]
    pub fn contents(&self) -> FormContents {
        FormContents {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}
