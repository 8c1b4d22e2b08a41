//! Contact form state machine.
//!
//! Status moves `Idle|Error -> Submitting -> Success|Error` per attempt and
//! returns from `Success` to `Idle` only through `reset`. Field values are
//! stored verbatim and cleared only when a submission succeeds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::FormStrings;

/// The four form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// HTML `name` attribute and JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

/// Field values, also the JSON body sent to the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Options of the subject select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    General,
    Bug,
    Feature,
    Feedback,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::General,
        Subject::Bug,
        Subject::Feature,
        Subject::Feedback,
        Subject::Other,
    ];

    /// Submitted option value.
    pub fn value(&self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Bug => "bug",
            Subject::Feature => "feature",
            Subject::Feedback => "feedback",
            Subject::Other => "other",
        }
    }

    pub fn label(&self, strings: &FormStrings) -> &'static str {
        match self {
            Subject::General => strings.subject_general,
            Subject::Bug => strings.subject_bug,
            Subject::Feature => strings.subject_feature,
            Subject::Feedback => strings.subject_feedback,
            Subject::Other => strings.subject_other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field '{}' is empty", .0.as_str())]
    MissingField(Field),

    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("no submission is in flight")]
    NotSubmitting,

    #[error("form can only be reset after a successful submission")]
    NotSucceeded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: FormData,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle form pre-filled with posted values.
    pub fn with_data(data: FormData) -> Self {
        Self {
            data,
            status: FormStatus::Idle,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Set one field verbatim. No trimming, no validation.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        *self.data.get_mut(field) = value.into();
    }

    /// Required-field check; reports the first empty field in display order.
    pub fn validate(&self) -> Result<(), FormError> {
        match Field::ALL.iter().find(|field| self.data.get(**field).is_empty()) {
            Some(field) => Err(FormError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Validate and enter `Submitting`, returning the relay payload.
    ///
    /// On error the status is left untouched.
    pub fn begin_submit(&mut self) -> Result<FormData, FormError> {
        if self.status == FormStatus::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.validate()?;
        self.status = FormStatus::Submitting;
        Ok(self.data.clone())
    }

    /// Record the relay outcome of the in-flight submission.
    pub fn complete(&mut self, delivered: bool) -> Result<FormStatus, FormError> {
        if self.status != FormStatus::Submitting {
            return Err(FormError::NotSubmitting);
        }
        if delivered {
            self.status = FormStatus::Success;
            self.data = FormData::default();
        } else {
            self.status = FormStatus::Error;
        }
        Ok(self.status)
    }

    /// Return from `Success` to `Idle` for a new message.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.status != FormStatus::Success {
            return Err(FormError::NotSucceeded);
        }
        self.status = FormStatus::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(Field::Name, "Ada");
        form.update(Field::Email, "ada@example.com");
        form.update(Field::Subject, "bug");
        form.update(Field::Message, "The merge tool drops page 3.");
        form
    }

    // ==================== Field Tests ====================

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let form = ContactForm::new();
        assert!(form.data().is_empty());
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_update_is_verbatim() {
        let mut form = ContactForm::new();
        form.update(Field::Name, "  Ada  ");
        assert_eq!(form.data().name, "  Ada  ");
    }

    #[test]
    fn test_field_names_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn test_subject_values() {
        let values: Vec<_> = Subject::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec!["general", "bug", "feature", "feedback", "other"]);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = filled_form();
        form.update(Field::Subject, "");
        form.update(Field::Message, "");
        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Subject)));
    }

    #[test]
    fn test_begin_submit_blocked_by_missing_field() {
        let mut form = filled_form();
        form.update(Field::Email, "");

        assert_eq!(form.begin_submit(), Err(FormError::MissingField(Field::Email)));
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.data().name, "Ada");
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled_form();
        form.update(Field::Message, " ");
        assert!(form.validate().is_ok());
    }

    // ==================== Transition Tests ====================

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled_form();
        let payload = form.begin_submit().expect("valid form");
        assert_eq!(payload.subject, "bug");
        assert_eq!(form.status(), FormStatus::Submitting);

        assert_eq!(form.complete(true), Ok(FormStatus::Success));
        assert!(form.data().is_empty());
    }

    #[test]
    fn test_error_keeps_fields() {
        let mut form = filled_form();
        let before = form.data().clone();
        form.begin_submit().expect("valid form");

        assert_eq!(form.complete(false), Ok(FormStatus::Error));
        assert_eq!(form.data(), &before);
    }

    #[test]
    fn test_resubmit_after_error() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete(false).unwrap();

        assert!(form.begin_submit().is_ok());
        assert_eq!(form.status(), FormStatus::Submitting);
    }

    #[test]
    fn test_duplicate_submit_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
        assert_eq!(form.status(), FormStatus::Submitting);
    }

    #[test]
    fn test_complete_without_submit_rejected() {
        let mut form = filled_form();
        assert_eq!(form.complete(true), Err(FormError::NotSubmitting));
        assert_eq!(form.data().name, "Ada");
    }

    #[test]
    fn test_reset_from_success() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete(true).unwrap();

        assert!(form.reset().is_ok());
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(form.data().is_empty());
    }

    #[test]
    fn test_reset_only_from_success() {
        let mut form = filled_form();
        assert_eq!(form.reset(), Err(FormError::NotSucceeded));

        form.begin_submit().unwrap();
        form.complete(false).unwrap();
        assert_eq!(form.reset(), Err(FormError::NotSucceeded));
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_payload_json_shape() {
        let form = filled_form();
        let json = serde_json::to_value(form.data()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "bug",
                "message": "The merge tool drops page 3."
            })
        );
    }

    #[test]
    fn test_missing_keys_deserialize_as_empty() {
        let data: FormData = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(data.name, "Ada");
        assert!(data.subject.is_empty());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FormStatus::Success).unwrap(),
            "\"success\""
        );
    }

    // ==================== Property Tests ====================

    fn field_strategy() -> impl Strategy<Value = Field> {
        prop_oneof![
            Just(Field::Name),
            Just(Field::Email),
            Just(Field::Subject),
            Just(Field::Message),
        ]
    }

    proptest! {
        #[test]
        fn prop_update_touches_only_one_field(field in field_strategy(), value in ".*") {
            let mut form = filled_form();
            let before = form.data().clone();
            form.update(field, value.clone());

            for other in Field::ALL {
                if other == field {
                    prop_assert_eq!(form.data().get(other), value.as_str());
                } else {
                    prop_assert_eq!(form.data().get(other), before.get(other));
                }
            }
        }
    }
}
