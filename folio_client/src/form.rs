use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use folio_models::contact::ContactReason;
use regex::Regex;
use serde::Serialize;

use crate::ContactClient;

/// How long the "message sent" confirmation is shown before the form reverts.
pub const CONFIRMATION_DURATION: Duration = Duration::from_secs(5);

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub reason: ContactReason,
}

/// Check the form fields for submission, mapping each failing field to its
/// error message. An empty map means the form may be submitted.
pub fn validate(fields: &FormFields) -> BTreeMap<FormField, &'static str> {
    let mut errors = BTreeMap::new();

    if fields.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }

    if fields.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !EMAIL_REGEX.is_match(&fields.email) {
        errors.insert(FormField::Email, "Email is invalid");
    }

    if fields.subject.trim().is_empty() {
        errors.insert(FormField::Subject, "Subject is required");
    }

    if fields.message.trim().is_empty() {
        errors.insert(FormField::Message, "Message is required");
    }

    errors
}

/// Contact form state: field values, per-field errors and the
/// submitting/submitted flags. All state is owned here; there is no shared
/// mutable singleton behind it.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: BTreeMap<FormField, &'static str>,
    submitting: bool,
    submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The message was accepted; the form is cleared and shows the
    /// confirmation state.
    Sent,
    /// Validation failed; the per-field errors have been recorded and no
    /// request was issued.
    Invalid,
    /// A submission is already in flight.
    InFlight,
    /// The relay rejected the message or the request failed. The entered
    /// values are kept so the user can retry manually.
    Failed { alert: String },
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &BTreeMap<FormField, &'static str> {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Update a field value. Editing a field dismisses its current error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::Subject => self.fields.subject = value,
            FormField::Message => self.fields.message = value,
        }
        self.errors.remove(&field);
    }

    pub fn set_reason(&mut self, reason: ContactReason) {
        self.fields.reason = reason;
    }

    /// Validate and submit the form. A single attempt, no retry.
    pub async fn submit(&mut self, client: &ContactClient) -> SubmitResult {
        if self.submitting {
            return SubmitResult::InFlight;
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return SubmitResult::Invalid;
        }

        self.submitting = true;
        let result = client.send(&self.fields).await;
        // Cleared on every path before the outcome is inspected.
        self.submitting = false;

        match result {
            Ok(response) if response.success => {
                self.fields = FormFields::default();
                self.submitted = true;
                SubmitResult::Sent
            }
            Ok(response) => SubmitResult::Failed {
                alert: format!(
                    "Something went wrong: {}",
                    response.message.as_deref().unwrap_or("Unknown error.")
                ),
            },
            Err(err) => {
                tracing::error!("Error submitting form: {err}");
                SubmitResult::Failed {
                    alert: "Failed to send message. Please try again later.".into(),
                }
            }
        }
    }

    /// Hold the confirmation state for its fixed window, then revert to the
    /// empty form.
    pub async fn await_confirmation(&mut self) {
        if !self.submitted {
            return;
        }
        tokio::time::sleep(CONFIRMATION_DURATION).await;
        self.submitted = false;
    }
}
