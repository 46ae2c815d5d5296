//! Contact form state and validation.
//!
//! Submission is simulated: a valid form enters a fixed-delay pending
//! state and always resolves successfully.

use std::time::Instant;

use crate::constants::SUBMIT_DELAY;

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in tab order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// The next field in tab order, wrapping.
    #[must_use]
    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    /// The previous field in tab order, wrapping.
    #[must_use]
    pub fn prev(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }
}

/// Submission state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Editable.
    Idle,
    /// Submission in flight; resolves at the embedded instant.
    Submitting { complete_at: Instant },
}

/// Structural email check: one `@` with non-empty local and domain
/// parts, a dot in the domain, and no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// The contact form: four text fields, a focus cursor, and a
/// submission state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    focus: Field,
    state: FormState,
    required_marks: [bool; 4],
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            focus: Field::Name,
            state: FormState::Idle,
            required_marks: [false; 4],
        }
    }
}

impl ContactForm {
    /// Create an empty form focused on the first field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// The focused field.
    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Current submission state.
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    /// Move focus to the next field in tab order.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field in tab order.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a character to the focused field. Ignored mid-submission.
    pub fn input(&mut self, ch: char) {
        if self.is_submitting() {
            return;
        }
        self.required_marks[self.focus.index()] = false;
        self.field_mut(self.focus).push(ch);
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.required_marks[self.focus.index()] = false;
        self.field_mut(self.focus).pop();
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Annotation for a field. A malformed email is flagged live; an
    /// empty required field is flagged after a failed submit attempt,
    /// and editing the field clears its mark.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        if self.required_marks[field.index()] && self.value(field).trim().is_empty() {
            return Some("required");
        }
        if field == Field::Email {
            let value = self.email.trim();
            if !value.is_empty() && !is_valid_email(value) {
                return Some("invalid email");
            }
        }
        None
    }

    /// Validation errors for the current values, in field order.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for field in Field::ALL {
            if self.value(field).trim().is_empty() {
                errors.push(format!("{} is required", field.label()));
            }
        }
        if !self.email.trim().is_empty() && !is_valid_email(self.email.trim()) {
            errors.push("Please enter a valid email address".to_string());
        }
        errors
    }

    /// Begin a submission attempt.
    ///
    /// Returns the validation errors on failure; on success the form
    /// enters the submitting state and resolves via [`Self::tick`].
    pub fn submit(&mut self, now: Instant) -> Result<(), Vec<String>> {
        if self.is_submitting() {
            return Ok(());
        }
        let errors = self.validation_errors();
        if !errors.is_empty() {
            for field in Field::ALL {
                self.required_marks[field.index()] = self.value(field).trim().is_empty();
            }
            return Err(errors);
        }
        self.required_marks = [false; 4];
        self.state = FormState::Submitting {
            complete_at: now + SUBMIT_DELAY,
        };
        Ok(())
    }

    /// Resolve a pending submission once its delay has elapsed.
    ///
    /// On resolution the fields are cleared and true is returned; the
    /// simulated backend always succeeds.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let FormState::Submitting { complete_at } = self.state {
            if now >= complete_at {
                self.state = FormState::Idle;
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.focus = Field::Name;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        for ch in "Ann".chars() {
            form.input(ch);
        }
        form.focus_next();
        for ch in "ann@example.com".chars() {
            form.input(ch);
        }
        form.focus_next();
        for ch in "Hi".chars() {
            form.input(ch);
        }
        form.focus_next();
        for ch in "Hello there".chars() {
            form.input(ch);
        }
        form
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn field_error_tracks_the_live_email_value() {
        let mut form = ContactForm::new();
        assert_eq!(form.field_error(Field::Email), None);

        form.focus_next(); // Email
        for ch in "bad".chars() {
            form.input(ch);
        }
        assert_eq!(form.field_error(Field::Email), Some("invalid email"));

        for ch in "@ok.dev".chars() {
            form.input(ch);
        }
        assert_eq!(form.field_error(Field::Email), None);
    }

    #[test]
    fn empty_fields_annotated_after_failed_submit() {
        let mut form = ContactForm::new();
        assert_eq!(form.field_error(Field::Name), None);

        form.submit(Instant::now()).unwrap_err();
        assert_eq!(form.field_error(Field::Name), Some("required"));
        assert_eq!(form.field_error(Field::Message), Some("required"));

        // Editing a field clears its mark; the others keep theirs.
        form.input('A');
        assert_eq!(form.field_error(Field::Name), None);
        assert_eq!(form.field_error(Field::Message), Some("required"));

        // Backspacing back to empty does not resurrect the mark.
        form.backspace();
        assert_eq!(form.field_error(Field::Name), None);
    }

    #[test]
    fn empty_form_reports_all_fields_required() {
        let form = ContactForm::new();
        let errors = form.validation_errors();
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("Name"));
    }

    #[test]
    fn whitespace_only_field_is_still_required() {
        let mut form = filled();
        // filled() leaves focus on Message; replace it with spaces.
        while !form.value(Field::Message).is_empty() {
            form.backspace();
        }
        form.input(' ');
        assert!(form
            .validation_errors()
            .iter()
            .any(|e| e.contains("Message")));
    }

    #[test]
    fn invalid_email_then_fix_then_submit() {
        let t0 = Instant::now();
        let mut form = filled();

        // Break the email.
        while form.focus() != Field::Email {
            form.focus_next();
        }
        while !form.value(Field::Email).is_empty() {
            form.backspace();
        }
        for ch in "not-an-email".chars() {
            form.input(ch);
        }
        let errors = form.submit(t0).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("valid email")));
        assert!(!form.is_submitting());

        // Fix it; the second attempt goes through.
        while !form.value(Field::Email).is_empty() {
            form.backspace();
        }
        for ch in "ok@site.dev".chars() {
            form.input(ch);
        }
        assert!(form.submit(t0).is_ok());
        assert!(form.is_submitting());
    }

    #[test]
    fn submission_resolves_after_delay_and_clears_fields() {
        let t0 = Instant::now();
        let mut form = filled();
        form.submit(t0).unwrap();

        assert!(!form.tick(t0 + SUBMIT_DELAY - Duration::from_millis(1)));
        assert!(form.is_submitting());

        assert!(form.tick(t0 + SUBMIT_DELAY));
        assert!(!form.is_submitting());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.focus(), Field::Name);
    }

    #[test]
    fn input_ignored_while_submitting() {
        let t0 = Instant::now();
        let mut form = filled();
        form.submit(t0).unwrap();
        form.input('x');
        form.backspace();
        assert_eq!(form.value(Field::Message), "Hello there");
    }

    #[test]
    fn double_submit_does_not_restart_the_delay() {
        let t0 = Instant::now();
        let mut form = filled();
        form.submit(t0).unwrap();
        form.submit(t0 + Duration::from_secs(1)).unwrap();
        assert!(form.tick(t0 + SUBMIT_DELAY));
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = ContactForm::new();
        form.focus_prev();
        assert_eq!(form.focus(), Field::Message);
        form.focus_next();
        assert_eq!(form.focus(), Field::Name);
    }
}
