use std::{future::Future, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::notify::Toast;

pub const NAME_MIN_LEN: usize = 2;
pub const SUBJECT_MIN_LEN: usize = 5;
pub const MESSAGE_MIN_LEN: usize = 10;

pub const SUCCESS_TITLE: &str = "Message sent successfully!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon.";
pub const FAILURE_TITLE: &str = "Failed to send message";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

// Leading dots and consecutive dots are rejected separately, the regex crate has no lookaround.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id and wire key.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Returns the first rule `value` breaks for this field, if any.
    /// Lengths are in UTF-16 code units, the unit browsers report.
    pub fn check(self, value: &str) -> Option<FieldError> {
        let len = value.encode_utf16().count();
        match self {
            Field::Name if len < NAME_MIN_LEN => Some(FieldError::NameTooShort),
            Field::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
            Field::Subject if len < SUBJECT_MIN_LEN => Some(FieldError::SubjectTooShort),
            Field::Message if len < MESSAGE_MIN_LEN => Some(FieldError::MessageTooShort),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
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
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<FieldError>,
    email: Option<FieldError>,
    subject: Option<FieldError>,
    message: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.slot(field).as_ref()
    }

    fn slot(&self, field: Field) -> &Option<FieldError> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, error: Option<FieldError>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = error;
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.slot(f).map(|e| (f, e)))
    }

    pub fn first(&self) -> Option<FieldError> {
        self.iter().next().map(|(_, e)| e)
    }
}

/// A contact request that passed validation. Only obtainable through
/// [`ContactSubmission::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn parse(fields: &ContactFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, field.check(fields.get(field)));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Splits into `(name, email, subject, message)`.
    pub fn into_parts(self) -> (String, String, String, String) {
        (self.name, self.email, self.subject, self.message)
    }
}

pub fn validate(fields: &ContactFields) -> Result<ContactSubmission, FieldErrors> {
    ContactSubmission::parse(fields)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Endpoint(String),
    #[error("Something went wrong. Please try again.")]
    Unknown,
}

impl SubmitError {
    /// Blank messages fall back to [`SubmitError::Unknown`].
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Endpoint(message)
        }
    }
}

/// Where validated submissions are delivered.
pub trait ContactEndpoint {
    fn send(&self, submission: ContactSubmission)
        -> impl Future<Output = Result<(), SubmitError>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// How the most recent attempt settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Invalid,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Send(ContactSubmission),
    Invalid,
    InFlight,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    phase: FormPhase,
    outcome: Option<Outcome>,
    revalidate: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Updates one field. Once an attempt has been rejected, the edited
    /// field is re-checked so its inline error tracks the input.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if self.revalidate {
            self.errors.set(field, field.check(&value));
        }
        *self.fields.get_mut(field) = value;
    }

    /// Validates the current input and, if it passes, moves to
    /// `Submitting` and hands back the submission to send.
    pub fn begin_submit(&mut self) -> Attempt {
        if self.is_submitting() {
            return Attempt::InFlight;
        }
        match ContactSubmission::parse(&self.fields) {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Submitting;
                Attempt::Send(submission)
            }
            Err(errors) => {
                self.errors = errors;
                self.revalidate = true;
                self.outcome = Some(Outcome::Invalid);
                Attempt::Invalid
            }
        }
    }

    /// Settles an in-flight attempt and returns the notification to show.
    pub fn finish(&mut self, result: Result<(), SubmitError>) -> Toast {
        self.phase = FormPhase::Idle;
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.errors = FieldErrors::default();
                self.revalidate = false;
                self.outcome = Some(Outcome::Succeeded);
                Toast::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION)
            }
            Err(err) => {
                self.outcome = Some(Outcome::Failed);
                Toast::destructive(FAILURE_TITLE, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::notify::ToastKind;

    struct FakeEndpoint {
        result: Result<(), SubmitError>,
        sent: RefCell<Vec<ContactSubmission>>,
    }

    impl FakeEndpoint {
        fn new(result: Result<(), SubmitError>) -> Self {
            Self {
                result,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactEndpoint for FakeEndpoint {
        fn send(
            &self,
            submission: ContactSubmission,
        ) -> impl Future<Output = Result<(), SubmitError>> {
            self.sent.borrow_mut().push(submission);
            let result = self.result.clone();
            async move { result }
        }
    }

    fn jane() -> ContactFields {
        ContactFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "I'd like to discuss a website.".to_string(),
        }
    }

    fn fill(form: &mut ContactForm, fields: &ContactFields) {
        for field in Field::ALL {
            form.set(field, fields.get(field));
        }
    }

    // One click: validate, send if valid, settle.
    fn click(form: &mut ContactForm, endpoint: &FakeEndpoint) -> Option<Toast> {
        match form.begin_submit() {
            Attempt::Send(submission) => {
                assert!(form.is_submitting());
                let result = tokio_test::block_on(endpoint.send(submission));
                Some(form.finish(result))
            }
            Attempt::Invalid | Attempt::InFlight => None,
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "jane@example.com",
            "a@b.co",
            "first.last+tag@mail.example.org",
            "o'brien@example.ie",
            "x_y-z@sub-domain.example.com",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "jane",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@example.c",
            ".jane@example.com",
            "ja..ne@example.com",
            "jane.@example.com",
            "jane@-example.com",
            "jane doe@example.com",
            "jane@example.com ",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_minimums_are_inclusive() {
        assert_eq!(Field::Name.check("Al"), None);
        assert_eq!(Field::Name.check("A"), Some(FieldError::NameTooShort));
        assert_eq!(Field::Subject.check("Hello"), None);
        assert_eq!(Field::Subject.check("Hell"), Some(FieldError::SubjectTooShort));
        assert_eq!(Field::Message.check("0123456789"), None);
        assert_eq!(Field::Message.check("012345678"), Some(FieldError::MessageTooShort));
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // one scalar value, two UTF-16 units
        assert_eq!(Field::Name.check("𝒜"), None);
        // one scalar value, one UTF-16 unit
        assert_eq!(Field::Name.check("é"), Some(FieldError::NameTooShort));
        assert_eq!(Field::Name.check("éé"), None);
        // 2 + 2 units
        assert_eq!(Field::Subject.check("😀😀"), Some(FieldError::SubjectTooShort));
        assert_eq!(Field::Subject.check("😀😀a"), None);
    }

    #[test]
    fn test_validate_reports_each_offending_field() {
        let errors = validate(&ContactFields::default()).unwrap_err();
        let collected = errors.iter().collect::<Vec<_>>();
        assert_eq!(
            collected,
            vec![
                (Field::Name, FieldError::NameTooShort),
                (Field::Email, FieldError::InvalidEmail),
                (Field::Subject, FieldError::SubjectTooShort),
                (Field::Message, FieldError::MessageTooShort),
            ]
        );
        assert_eq!(errors.first(), Some(FieldError::NameTooShort));
    }

    #[test]
    fn test_validate_passes_jane() {
        let submission = validate(&jane()).expect("Jane's input is valid");
        assert_eq!(submission.name(), "Jane Doe");
        assert_eq!(submission.email(), "jane@example.com");
        assert_eq!(submission.subject(), "Project Inquiry");
        assert_eq!(submission.message(), "I'd like to discuss a website.");
    }

    #[test]
    fn test_short_name_blocks_submission() {
        let mut form = ContactForm::new();
        fill(
            &mut form,
            &ContactFields {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                subject: "Hi there".to_string(),
                message: "Hello world!".to_string(),
            },
        );
        let endpoint = FakeEndpoint::new(Ok(()));

        assert!(click(&mut form, &endpoint).is_none());
        assert!(endpoint.sent.borrow().is_empty());
        assert_eq!(
            form.error(Field::Name).map(ToString::to_string).as_deref(),
            Some("Name must be at least 2 characters")
        );
        for field in [Field::Email, Field::Subject, Field::Message] {
            assert!(form.error(field).is_none(), "{field:?} should be valid");
        }
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.outcome(), Some(Outcome::Invalid));
        assert_eq!(form.value(Field::Name), "A");
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = ContactForm::new();
        fill(&mut form, &jane());
        let endpoint = FakeEndpoint::new(Ok(()));

        let toast = click(&mut form, &endpoint).expect("should have sent");
        assert_eq!(endpoint.sent.borrow().len(), 1);
        assert_eq!(endpoint.sent.borrow()[0], validate(&jane()).unwrap());
        assert!(form.fields().is_empty());
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.outcome(), Some(Outcome::Succeeded));
        assert_eq!(toast.title, SUCCESS_TITLE);
        assert_eq!(toast.description, SUCCESS_DESCRIPTION);
        assert_eq!(toast.kind, ToastKind::Default);
    }

    #[test]
    fn test_failure_keeps_fields_and_reports_message() {
        let mut form = ContactForm::new();
        fill(&mut form, &jane());
        let endpoint = FakeEndpoint::new(Err(SubmitError::from_message("Server unavailable")));

        let toast = click(&mut form, &endpoint).expect("should have sent");
        assert_eq!(endpoint.sent.borrow().len(), 1);
        assert_eq!(form.fields(), &jane());
        assert_eq!(form.outcome(), Some(Outcome::Failed));
        assert!(!form.is_submitting());
        assert_eq!(toast.title, FAILURE_TITLE);
        assert_eq!(toast.description, "Server unavailable");
        assert_eq!(toast.kind, ToastKind::Destructive);
    }

    #[test]
    fn test_failure_without_message_uses_generic_text() {
        let mut form = ContactForm::new();
        fill(&mut form, &jane());
        let endpoint = FakeEndpoint::new(Err(SubmitError::from_message("  ")));

        let toast = click(&mut form, &endpoint).unwrap();
        assert_eq!(toast.description, GENERIC_FAILURE);
    }

    #[test]
    fn test_no_second_attempt_while_in_flight() {
        let mut form = ContactForm::new();
        fill(&mut form, &jane());

        assert!(matches!(form.begin_submit(), Attempt::Send(_)));
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Attempt::InFlight);
        assert!(form.is_submitting());

        form.finish(Ok(()));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_retry_after_failure_is_a_new_attempt() {
        let mut form = ContactForm::new();
        fill(&mut form, &jane());
        let failing = FakeEndpoint::new(Err(SubmitError::Unknown));
        click(&mut form, &failing).unwrap();
        assert_eq!(failing.sent.borrow().len(), 1);

        let working = FakeEndpoint::new(Ok(()));
        click(&mut form, &working).unwrap();
        assert_eq!(working.sent.borrow().len(), 1);
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_errors_track_input_after_rejected_attempt() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "A");
        // no inline errors before the first attempt
        assert!(form.error(Field::Name).is_none());

        assert_eq!(form.begin_submit(), Attempt::Invalid);
        assert_eq!(form.error(Field::Name), Some(&FieldError::NameTooShort));

        form.set(Field::Name, "Al");
        assert!(form.error(Field::Name).is_none());
        form.set(Field::Name, "");
        assert_eq!(form.error(Field::Name), Some(&FieldError::NameTooShort));
    }

    #[test]
    fn test_submit_error_from_message() {
        assert_eq!(
            SubmitError::from_message("boom"),
            SubmitError::Endpoint("boom".to_string())
        );
        assert_eq!(SubmitError::from_message(""), SubmitError::Unknown);
        assert_eq!(SubmitError::Unknown.to_string(), GENERIC_FAILURE);

        // transport failures surface the browser's message as-is
        let err = SubmitError::from_message("TypeError: Failed to fetch");
        assert_eq!(err.to_string(), "TypeError: Failed to fetch");
    }
}
