use crate::validation::{
    contact_validation::{ContactValidation, Field},
    ValidationState,
};

/// simulated round trip before the form reports success
pub const SUBMIT_DELAY_MS: u32 = 1500;
/// how long the success notification stays visible
pub const SUCCESS_DISPLAY_MS: u32 = 5000;
/// length of the shake cue on a rejected submit, synced with css
pub const SHAKE_MS: u32 = 500;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// all fields passed, the caller schedules the completion
    Started,
    /// at least one field failed, errors are set on exactly those fields
    Rejected,
    /// a submission is already in flight
    Ignored,
}

#[derive(Default, Debug, Clone, Eq, PartialEq)]
struct Values {
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl Values {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }
}

/// State of the single contact form on the page.
///
/// Errors appear only through [`ContactForm::validate_field`] (blur) or
/// [`ContactForm::submit`], while [`ContactForm::set_value`] (input) can only
/// ever clear them.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct ContactForm {
    values: Values,
    errors: ContactValidation,
    status: SubmissionStatus,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Validating | SubmissionStatus::Submitting
        )
    }

    #[must_use]
    pub const fn errors(&self) -> &ContactValidation {
        &self.errors
    }

    #[must_use]
    pub const fn has_error(&self, field: Field) -> bool {
        self.errors.has_error(field)
    }

    #[must_use]
    pub const fn error_message(&self, field: Field) -> Option<&'static str> {
        if self.errors.has_error(field) {
            Some(field.error_message())
        } else {
            None
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        *self.values.get_mut(field) = value;

        if self.errors.has_error(field) && ContactValidation::is_valid(field, self.value(field)) {
            self.errors.clear(field);
        }
    }

    pub fn validate_field(&mut self, field: Field) -> bool {
        let valid = self.errors.check(field, self.values.get(field));

        if valid {
            // a valid field shows nothing, same as one never checked
            self.errors.clear(field);
        }

        valid
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        match self.status {
            SubmissionStatus::Validating | SubmissionStatus::Submitting => {
                return SubmitOutcome::Ignored;
            }
            SubmissionStatus::Success => {
                self.dismiss_success();
            }
            SubmissionStatus::Idle => {}
        }

        self.status = SubmissionStatus::Validating;

        let results = Field::ALL.map(|field| self.validate_field(field));

        if results.iter().all(|valid| *valid) {
            self.status = SubmissionStatus::Submitting;
            SubmitOutcome::Started
        } else {
            self.status = SubmissionStatus::Idle;
            SubmitOutcome::Rejected
        }
    }

    pub fn complete_submission(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }

        self.values = Values::default();
        self.errors = ContactValidation::default();
        self.status = SubmissionStatus::Success;
        true
    }

    pub fn dismiss_success(&mut self) -> bool {
        if self.status != SubmissionStatus::Success {
            return false;
        }

        self.status = SubmissionStatus::Idle;
        true
    }

    #[must_use]
    pub fn state(&self, field: Field) -> ValidationState<()> {
        if self.errors.has_error(field) {
            ValidationState::Invalid(())
        } else if ContactValidation::is_valid(field, self.value(field)) {
            ValidationState::Valid
        } else {
            ValidationState::Unused
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_value(Field::Name, "Amina".into());
        form.set_value(Field::Email, "amina@example.co.tz".into());
        form.set_value(Field::Phone, "0712 345 678".into());
        form.set_value(Field::Message, "Do you stock 12mm rebar?".into());
        form
    }

    #[test]
    fn test_valid_submit_flow() {
        let mut form = filled();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.is_busy());
        // still holds the values until the delay elapsed
        assert_eq!(form.value(Field::Name), "Amina");

        assert!(form.complete_submission());
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(!form.is_busy());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.has_error(field));
        }

        assert!(form.dismiss_success());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_invalid_submit_marks_exactly_invalid_fields() {
        let mut form = filled();
        form.set_value(Field::Email, "user@domain".into());
        form.set_value(Field::Message, "Hi".into());

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.status(), SubmissionStatus::Idle);

        assert!(!form.has_error(Field::Name));
        assert!(form.has_error(Field::Email));
        assert!(!form.has_error(Field::Phone));
        assert!(form.has_error(Field::Message));

        assert_eq!(
            form.error_message(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.error_message(Field::Name), None);
        // nothing is cleared on rejection
        assert_eq!(form.value(Field::Message), "Hi");
    }

    #[test]
    fn test_empty_submit_marks_all_fields() {
        let mut form = ContactForm::default();

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        for field in Field::ALL {
            assert!(form.has_error(field), "{field:?}");
        }
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Started);

        let before = form.clone();
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_from_success_starts_over() {
        let mut form = filled();
        form.submit();
        form.complete_submission();

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(!form.dismiss_success());
    }

    #[test]
    fn test_completion_only_from_submitting() {
        let mut form = filled();
        assert!(!form.complete_submission());
        assert_eq!(form.value(Field::Name), "Amina");
        assert!(!form.dismiss_success());
    }

    #[test]
    fn test_input_clears_but_never_sets() {
        let mut form = ContactForm::default();

        form.set_value(Field::Name, "a".into());
        assert!(!form.has_error(Field::Name));

        assert!(!form.validate_field(Field::Name));
        assert!(form.has_error(Field::Name));

        form.set_value(Field::Name, "".into());
        assert!(form.has_error(Field::Name));

        form.set_value(Field::Name, "Ab".into());
        assert!(!form.has_error(Field::Name));

        form.set_value(Field::Name, "A".into());
        assert!(!form.has_error(Field::Name));
    }

    #[test]
    fn test_blur_clears_a_fixed_field() {
        let mut form = ContactForm::default();
        form.set_value(Field::Phone, "555-1234".into());
        assert!(!form.validate_field(Field::Phone));
        assert!(form.has_error(Field::Phone));

        // set outside of the input path so the error is still shown
        form.values.phone = "555-123-4567".into();
        assert!(form.has_error(Field::Phone));
        assert!(form.validate_field(Field::Phone));
        assert!(!form.has_error(Field::Phone));
    }

    #[test]
    fn test_field_state() {
        let mut form = ContactForm::default();
        assert_eq!(form.state(Field::Email), ValidationState::Unused);

        form.set_value(Field::Email, "a@b.co".into());
        assert_eq!(form.state(Field::Email), ValidationState::Valid);

        form.set_value(Field::Email, "nope".into());
        form.validate_field(Field::Email);
        assert_eq!(form.state(Field::Email), ValidationState::Invalid(()));
    }
}
