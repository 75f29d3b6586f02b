//! Contact-form state machine.
//!
//! Pure data, no rendering and no I/O: the view feeds events in
//! ([`ContactFormState::field_changed`], [`ContactFormState::begin_submit`],
//! …) and reads the resulting snapshot back out. Keeping this free of Dioxus
//! types is what lets the whole submission lifecycle be unit tested.

use std::collections::{BTreeMap, BTreeSet};

use super::rules::{self, Field};
use crate::i18n::Locale;

/// Current value of every form field. All empty on mount and after a
/// successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Interest => &self.interest,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Interest => &mut self.interest,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submission lifecycle. `Succeeded`/`Failed` are transient notices that
/// clear back to `Idle` on a timer or explicit dismissal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_notice(&self) -> bool {
        matches!(self, SubmitStatus::Succeeded | SubmitStatus::Failed(_))
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation passed; the caller must perform the network call.
    Proceed,
    /// Validation failed; mandatory-field errors are now visible.
    Invalid,
    /// A submission is already in flight.
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub values: FieldValues,
    touched: BTreeSet<Field>,
    errors: BTreeMap<Field, String>,
    pub status: SubmitStatus,
    notice_ticket: u64,
}

impl ContactFormState {
    /// Store a new field value. Live re-validation kicks in only once the
    /// field has been blurred, so a first draft is not flagged mid-typing.
    pub fn field_changed(&mut self, field: Field, value: String, locale: Locale) {
        self.values.set(field, value);
        if self.touched.contains(&field) {
            self.revalidate(field, locale);
        }
    }

    /// Mark the field touched and validate it.
    pub fn field_blurred(&mut self, field: Field, locale: Locale) {
        self.touched.insert(field);
        self.revalidate(field, locale);
    }

    /// Validate every field that is required or non-empty; optional empty
    /// fields are skipped. Replaces the whole error map so stale entries for
    /// skipped fields disappear. Returns overall validity.
    pub fn validate_all(&mut self, locale: Locale) -> bool {
        let mut errors = BTreeMap::new();
        for field in Field::ALL {
            let value = self.values.get(field);
            if field.is_required() || !value.is_empty() {
                if let Some(message) = rules::validate_field(field, value, locale) {
                    errors.insert(field, message);
                }
            }
        }
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Gate a submit attempt. At most one submission is in flight: while
    /// `Submitting` every further attempt is rejected without side effects.
    pub fn begin_submit(&mut self, locale: Locale) -> SubmitDecision {
        if self.status == SubmitStatus::Submitting {
            return SubmitDecision::Rejected;
        }
        if !self.validate_all(locale) {
            // Surface the errors that block submission even if the visitor
            // never reached those fields.
            self.touched.extend(Field::MANDATORY);
            return SubmitDecision::Invalid;
        }
        self.status = SubmitStatus::Submitting;
        SubmitDecision::Proceed
    }

    /// The endpoint accepted the payload: wipe the form and show the success
    /// notice. Returns the ticket identifying this notice for auto-dismissal.
    pub fn complete_success(&mut self) -> u64 {
        self.values.reset();
        self.touched.clear();
        self.errors.clear();
        self.status = SubmitStatus::Succeeded;
        self.next_ticket()
    }

    /// The submission failed: keep the visitor's input so they can resubmit
    /// without retyping, and show the (already translated) generic message.
    pub fn complete_failure(&mut self, message: String) -> u64 {
        self.status = SubmitStatus::Failed(message);
        self.next_ticket()
    }

    /// Timer-driven dismissal. Only the ticket handed out with the current
    /// notice may clear it; earlier timers are stale and ignored.
    pub fn notice_elapsed(&mut self, ticket: u64) {
        if ticket == self.notice_ticket && self.status.is_notice() {
            self.status = SubmitStatus::Idle;
        }
    }

    /// User-driven dismissal, effective immediately.
    pub fn dismiss_notice(&mut self) {
        if self.status.is_notice() {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Error text for a field, visible only once the field is touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    fn revalidate(&mut self, field: Field, locale: Locale) {
        match rules::validate_field(field, self.values.get(field), locale) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    fn next_ticket(&mut self) -> u64 {
        self.notice_ticket += 1;
        self.notice_ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.values.name = "Jane".into();
        state.values.email = "jane@x.com".into();
        state.values.message = "Hello there, I am interested.".into();
        state
    }

    #[test]
    fn errors_stay_hidden_until_blur() {
        let mut state = ContactFormState::default();
        state.field_changed(Field::Email, "not-an-email".into(), Locale::En);
        assert_eq!(state.visible_error(Field::Email), None);

        state.field_blurred(Field::Email, Locale::En);
        assert_eq!(
            state.visible_error(Field::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn live_validation_after_first_blur() {
        let mut state = ContactFormState::default();
        state.field_blurred(Field::Email, Locale::En);
        assert_eq!(state.visible_error(Field::Email), Some("Email is required"));

        // Subsequent edits re-validate immediately.
        state.field_changed(Field::Email, "a@b.co".into(), Locale::En);
        assert_eq!(state.visible_error(Field::Email), None);
    }

    #[test]
    fn minimal_valid_form_proceeds() {
        let mut state = filled_state();
        assert!(state.validate_all(Locale::En));
        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Proceed);
        assert!(state.is_submitting());
    }

    #[test]
    fn missing_name_blocks_submit_and_reveals_mandatory_errors() {
        let mut state = filled_state();
        state.values.name.clear();

        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Invalid);
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.visible_error(Field::Name), Some("Name is required"));
        // The other mandatory fields are touched too, but valid.
        assert_eq!(state.visible_error(Field::Email), None);
        assert_eq!(state.visible_error(Field::Message), None);
    }

    #[test]
    fn optional_empty_fields_are_skipped_by_whole_form_validation() {
        let mut state = filled_state();
        assert!(state.validate_all(Locale::It));

        // A short company name is only an error once non-empty.
        state.values.company = "A".into();
        assert!(!state.validate_all(Locale::It));
        state.values.company.clear();
        assert!(state.validate_all(Locale::It));
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut state = filled_state();
        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Proceed);
        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Rejected);
    }

    #[test]
    fn success_clears_the_form() {
        let mut state = filled_state();
        state.field_blurred(Field::Name, Locale::En);
        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Proceed);

        let ticket = state.complete_success();
        assert_eq!(state.status, SubmitStatus::Succeeded);
        assert_eq!(state.values, FieldValues::default());
        assert_eq!(state.visible_error(Field::Name), None);

        state.notice_elapsed(ticket);
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn failure_keeps_field_values() {
        let mut state = filled_state();
        assert_eq!(state.begin_submit(Locale::It), SubmitDecision::Proceed);

        state.complete_failure("Non siamo riusciti a inviare la richiesta.".into());
        assert_eq!(
            state.status,
            SubmitStatus::Failed("Non siamo riusciti a inviare la richiesta.".into())
        );
        assert_eq!(state.values.name, "Jane");
        assert_eq!(state.values.message, "Hello there, I am interested.");
    }

    #[test]
    fn stale_dismiss_ticket_is_ignored() {
        let mut state = filled_state();
        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Proceed);
        let first = state.complete_success();

        // A new submission fails before the first notice's timer fires.
        state.values = filled_state().values;
        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Proceed);
        let second = state.complete_failure("generic".into());

        state.notice_elapsed(first);
        assert!(state.status.is_notice(), "stale ticket must not dismiss");
        state.notice_elapsed(second);
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn explicit_dismissal_beats_the_timer() {
        let mut state = filled_state();
        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Proceed);
        let ticket = state.complete_success();

        state.dismiss_notice();
        assert_eq!(state.status, SubmitStatus::Idle);

        // The timer firing afterwards is a no-op.
        state.notice_elapsed(ticket);
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn dismiss_outside_a_notice_is_a_no_op() {
        let mut state = ContactFormState::default();
        state.dismiss_notice();
        assert_eq!(state.status, SubmitStatus::Idle);

        let mut state = filled_state();
        assert_eq!(state.begin_submit(Locale::En), SubmitDecision::Proceed);
        state.dismiss_notice();
        assert!(state.is_submitting(), "dismiss must not abort a submission");
    }
}
