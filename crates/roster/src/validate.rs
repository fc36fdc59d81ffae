//! Admin draft validation.
//!
//! Validation is synchronous, side-effect free, and reports failures as
//! data: a field → message map the caller can render inline. A failing
//! report blocks the write entirely; nothing is partially applied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use society_desk_core::Email;

use crate::models::{AdminDraft, AdminPatch};

/// A form field that can carry a validation message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// The display-name input.
    Name,
    /// The email input.
    Email,
    /// The phone input.
    Phone,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// Outcome of validating a draft or patch: zero or more field-scoped
/// messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<FormField, String>,
}

impl ValidationReport {
    /// Whether every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for one field, if that field failed.
    #[must_use]
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All failing fields with their messages, in field order.
    pub fn errors(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no field failed. Alias of [`ValidationReport::is_valid`]
    /// for collection-style call sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, field: FormField, message: &str) {
        self.errors.insert(field, message.to_owned());
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

const NAME_REQUIRED: &str = "Name is required";
const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Invalid email format";
const PHONE_REQUIRED: &str = "Phone is required";

fn check_name(report: &mut ValidationReport, name: &str) {
    if name.trim().is_empty() {
        report.push(FormField::Name, NAME_REQUIRED);
    }
}

fn check_email(report: &mut ValidationReport, email: &str) {
    if email.trim().is_empty() {
        report.push(FormField::Email, EMAIL_REQUIRED);
    } else if Email::parse(email).is_err() {
        report.push(FormField::Email, EMAIL_INVALID);
    }
}

fn check_phone(report: &mut ValidationReport, phone: &str) {
    if phone.trim().is_empty() {
        report.push(FormField::Phone, PHONE_REQUIRED);
    }
}

/// Validate a create/update draft.
///
/// Rules: name and phone must be non-empty after trimming; email must be
/// non-empty and shaped like `local@domain.tld`.
#[must_use]
pub fn validate(draft: &AdminDraft) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_name(&mut report, &draft.name);
    check_email(&mut report, &draft.email);
    check_phone(&mut report, &draft.phone);
    report
}

/// Validate the fields a patch actually touches.
///
/// Fields the patch leaves alone are not re-checked; the stored values
/// already passed validation when they were written.
#[must_use]
pub fn validate_patch(patch: &AdminPatch) -> ValidationReport {
    let mut report = ValidationReport::default();
    if let Some(name) = &patch.name {
        check_name(&mut report, name);
    }
    if let Some(email) = &patch.email {
        check_email(&mut report, email);
    }
    if let Some(phone) = &patch.phone {
        check_phone(&mut report, phone);
    }
    report
}
