#![forbid(unsafe_code)]

//! Contact form validation gate and simulated submission.
//!
//! Validation is pure and per-field; the gate validates every field (no
//! short-circuit) and reports all errors together, in field order. An
//! accepted submission arms a fixed-delay acknowledgment timer standing in
//! for the network round-trip; when it fires, one success notice is posted
//! and the fields reset. Nothing here touches a network.

use std::time::Duration;

use pagelet_runtime::{Scheduler, TimerHandle};

use crate::notice::{NoticeCenter, NoticeKind};

/// Delay of the simulated acknowledgment.
pub const ACK_DELAY: Duration = Duration::from_millis(400);

/// Success notice text.
pub const SUCCESS_TEXT: &str = "Your message has been sent successfully!";

/// The form's required fields, in validation/report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKind {
    /// All fields, in order.
    pub const ALL: [FieldKind; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Lowercase field name as it appears in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// A failed field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldKind,
    pub message: String,
}

/// Validate one field. `Err` carries the inline message to show.
///
/// Required-text fields are valid iff the trimmed value is non-empty. The
/// email field distinguishes two failures: empty (same message shape as the
/// other required fields) and present-but-malformed.
pub fn validate(kind: FieldKind, raw: &str) -> Result<(), String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("Please enter your {}.", kind.label()));
    }
    if kind == FieldKind::Email && !is_plausible_email(value) {
        return Err("Please enter a valid email address.".to_owned());
    }
    Ok(())
}

/// Permissive email shape: `something@something.something`, no embedded
/// whitespace anywhere.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = value.find('@') else {
        return false;
    };
    let (local, domain) = (&value[..at], &value[at + 1..]);
    if local.is_empty() {
        return false;
    }
    let Some(dot) = domain.rfind('.') else {
        return false;
    };
    !domain[..dot].is_empty() && !domain[dot + 1..].is_empty()
}

/// Raw field values as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    /// The raw value of a field.
    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Subject => &self.subject,
            FieldKind::Message => &self.message,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, kind: FieldKind, value: impl Into<String>) {
        let slot = match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Subject => &mut self.subject,
            FieldKind::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The contact form: values plus the pending simulated acknowledgment.
#[derive(Debug, Default)]
pub struct ContactForm {
    values: FormValues,
    ack: Option<TimerHandle>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Mutable values (typing).
    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    /// Whether a simulated acknowledgment is pending.
    pub fn is_submitting(&self) -> bool {
        self.ack.is_some()
    }

    /// Validate everything; on acceptance arm the simulated acknowledgment.
    ///
    /// All fields are validated — one failure does not short-circuit the
    /// rest — and errors come back in field order. Re-submitting while an
    /// acknowledgment is pending replaces the pending timer.
    pub fn submit(&mut self, sched: &mut Scheduler) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = FieldKind::ALL
            .iter()
            .filter_map(|&field| {
                validate(field, self.values.get(field))
                    .err()
                    .map(|message| FieldError { field, message })
            })
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        if let Some(previous) = self.ack.take() {
            sched.cancel(previous);
        }
        self.ack = Some(sched.schedule_once(ACK_DELAY));
        tracing::debug!("form accepted; acknowledgment armed");
        Ok(())
    }

    /// Consume a fired timer. When it is the pending acknowledgment: post
    /// the success notice, reset the fields, and return `true`.
    pub fn on_timer(
        &mut self,
        fired: TimerHandle,
        sched: &mut Scheduler,
        notices: &mut NoticeCenter,
    ) -> bool {
        if self.ack != Some(fired) {
            return false;
        }
        self.ack = None;
        notices.post(sched, SUCCESS_TEXT, NoticeKind::Success);
        self.values.reset();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Field validation ---

    #[test]
    fn required_text_messages() {
        assert_eq!(
            validate(FieldKind::Name, "   "),
            Err("Please enter your name.".to_owned())
        );
        assert_eq!(
            validate(FieldKind::Subject, ""),
            Err("Please enter your subject.".to_owned())
        );
        assert_eq!(
            validate(FieldKind::Message, "\n\t"),
            Err("Please enter your message.".to_owned())
        );
        assert_eq!(validate(FieldKind::Name, " Ada "), Ok(()));
    }

    #[test]
    fn email_distinguishes_empty_from_malformed() {
        assert_eq!(
            validate(FieldKind::Email, ""),
            Err("Please enter your email.".to_owned())
        );
        assert_eq!(
            validate(FieldKind::Email, "not-an-email"),
            Err("Please enter a valid email address.".to_owned())
        );
        assert_eq!(validate(FieldKind::Email, "a@b.c"), Ok(()));
    }

    #[test]
    fn email_shapes() {
        for valid in ["a@b.c", "first.last@example.co.uk", "x@y.z"] {
            assert_eq!(validate(FieldKind::Email, valid), Ok(()), "{valid}");
        }
        for invalid in ["a@b", "@b.c", "a@.c", "a@b.", "a b@c.d", "a@b .c", "plain"] {
            assert!(validate(FieldKind::Email, invalid).is_err(), "{invalid}");
        }
    }

    // --- Gate ---

    fn valid_values() -> FormValues {
        FormValues {
            name: "Ada".into(),
            email: "x@y.z".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn all_errors_are_collected_in_field_order() {
        let mut sched = Scheduler::new();
        let mut form = ContactForm::new();
        *form.values_mut() = FormValues {
            name: String::new(),
            email: "x@y.z".into(),
            subject: "Hi".into(),
            message: String::new(),
        };

        let errors = form.submit(&mut sched).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, FieldKind::Name);
        assert_eq!(errors[1].field, FieldKind::Message);
        assert!(!form.is_submitting(), "rejection must not arm the ack");
        assert_eq!(sched.live_count(), 0);
    }

    #[test]
    fn accepted_submission_notifies_once_and_resets() {
        let mut sched = Scheduler::new();
        let mut notices = NoticeCenter::new();
        let mut form = ContactForm::new();
        *form.values_mut() = valid_values();

        form.submit(&mut sched).unwrap();
        assert!(form.is_submitting());

        let fired = sched.advance(ACK_DELAY);
        assert_eq!(fired.len(), 1);
        assert!(form.on_timer(fired[0], &mut sched, &mut notices));

        assert_eq!(notices.len(), 1);
        assert_eq!(notices.iter().next().unwrap().text, SUCCESS_TEXT);
        assert_eq!(form.values(), &FormValues::default());
        assert!(!form.is_submitting());
    }

    #[test]
    fn resubmit_replaces_the_pending_ack() {
        let mut sched = Scheduler::new();
        let mut form = ContactForm::new();
        *form.values_mut() = valid_values();

        form.submit(&mut sched).unwrap();
        form.submit(&mut sched).unwrap();
        assert_eq!(sched.live_count(), 1, "single live acknowledgment");
    }

    #[test]
    fn unrelated_timers_are_ignored() {
        let mut sched = Scheduler::new();
        let mut notices = NoticeCenter::new();
        let mut form = ContactForm::new();
        let stray = sched.schedule_once(ACK_DELAY);
        assert!(!form.on_timer(stray, &mut sched, &mut notices));
        assert!(notices.is_empty());
    }
}
