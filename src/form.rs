//! Contact form - validation rules and the submission state machine
//!
//! Validation runs on submit; errors are field-keyed and rendered next to
//! their field. A passing submission issues exactly one request through the
//! [`FormTransport`] port and lands in `Success` or `Error`, either of
//! which auto-reverts to `Idle` after a fixed five seconds. The submitting
//! flag is the sole double-send guard; there is no content de-duplication.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;

/// Hidden form identifier sent with every submission
pub const FORM_NAME: &str = "contact";

/// Anti-automation honeypot field; humans never see or fill it
pub const HONEYPOT_FIELD: &str = "bot-field";

/// How long a success/error banner stays up before reverting to idle
pub const STATUS_REVERT: Duration = Duration::from_secs(5);

pub const MIN_NAME: usize = 2;
pub const MIN_SUBJECT: usize = 5;
pub const MIN_MESSAGE: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex"));

/// The four user-facing fields plus the honeypot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Carried through to the endpoint; filtering bots is its job
    pub honeypot: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// One field-scoped validation error with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Validate a submission against the declarative rules
///
/// Character counts are Unicode scalar values, not bytes. Returns every
/// failing field, in field order.
pub fn validate(submission: &Submission) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if submission.name.chars().count() < MIN_NAME {
        errors.push(FieldError {
            field: Field::Name,
            message: format!("Name must be at least {MIN_NAME} characters"),
        });
    }
    if !EMAIL_SHAPE.is_match(&submission.email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter a valid email address".to_string(),
        });
    }
    if submission.subject.chars().count() < MIN_SUBJECT {
        errors.push(FieldError {
            field: Field::Subject,
            message: format!("Subject must be at least {MIN_SUBJECT} characters"),
        });
    }
    if submission.message.chars().count() < MIN_MESSAGE {
        errors.push(FieldError {
            field: Field::Message,
            message: format!("Message must be at least {MIN_MESSAGE} characters"),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Form-encode a submission for the endpoint
///
/// Fields in wire order: `form-name`, `name`, `email`, `subject`,
/// `message`, plus the honeypot.
pub fn encode_payload(submission: &Submission) -> String {
    let pairs = [
        ("form-name", FORM_NAME),
        ("name", submission.name.as_str()),
        ("email", submission.email.as_str()),
        ("subject", submission.subject.as_str()),
        ("message", submission.message.as_str()),
        (HONEYPOT_FIELD, submission.honeypot.as_str()),
    ];
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// application/x-www-form-urlencoded component encoding
fn url_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

/// Outbound submission channel
///
/// The page script's counterpart is a `fetch` POST; tests use closures.
pub trait FormTransport {
    /// Returns the response status code, or `Err` on transport failure
    fn post(&mut self, endpoint: &str, payload: &str) -> Result<u16, String>;
}

impl<F> FormTransport for F
where
    F: FnMut(&str, &str) -> Result<u16, String>,
{
    fn post(&mut self, endpoint: &str, payload: &str) -> Result<u16, String> {
        self(endpoint, payload)
    }
}

/// Where the form currently is, display-wise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request issued; phase moved to Success or Error
    Sent(Phase),
    /// Field errors; nothing sent
    Invalid(Vec<FieldError>),
    /// A submission is already in flight; nothing sent
    AlreadySubmitting,
}

/// A validated request ready to go out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub payload: String,
}

/// The submission state machine
///
/// `Idle -> Submitting -> {Success, Error} -> (5 s) -> Idle`. The request
/// itself is fire-and-forget: `begin` moves to `Submitting` and hands back
/// the encoded request, `resolve` lands the response. The submitting flag
/// is the sole double-send guard. `tick` drives the timed revert.
#[derive(Debug, Default)]
pub struct ContactForm {
    phase: Phase,
    revert_at: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Validate and enter the submitting state
    pub fn begin(&mut self, submission: &Submission) -> Result<OutboundRequest, SubmitOutcome> {
        if self.phase == Phase::Submitting {
            return Err(SubmitOutcome::AlreadySubmitting);
        }
        if let Err(errors) = validate(submission) {
            return Err(SubmitOutcome::Invalid(errors));
        }
        self.phase = Phase::Submitting;
        Ok(OutboundRequest {
            payload: encode_payload(submission),
        })
    }

    /// Land the response for the in-flight request
    ///
    /// Any 2xx is success; every other status and any transport failure is
    /// an error. Either way the banner auto-reverts five seconds from `now`.
    pub fn resolve(&mut self, result: Result<u16, String>, now: Instant) -> Phase {
        let outcome = match result {
            Ok(status) if (200..300).contains(&status) => Phase::Success,
            Ok(_) | Err(_) => Phase::Error,
        };
        self.phase = outcome;
        self.revert_at = Some(now + STATUS_REVERT);
        outcome
    }

    /// Validate and, if clean, send exactly one request through `transport`
    pub fn submit(
        &mut self,
        submission: &Submission,
        endpoint: &str,
        transport: &mut dyn FormTransport,
        now: Instant,
    ) -> SubmitOutcome {
        let request = match self.begin(submission) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = transport.post(endpoint, &request.payload);
        SubmitOutcome::Sent(self.resolve(result, now))
    }

    /// Advance the clock; reverts a stale status banner to idle
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.revert_at {
            if now >= at && matches!(self.phase, Phase::Success | Phase::Error) {
                self.phase = Phase::Idle;
                self.revert_at = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> Submission {
        Submission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello there".into(),
            message: "This is a message".into(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn short_name_is_rejected() {
        let submission = Submission {
            name: "A".into(),
            email: "x@y.com".into(),
            subject: "Hello there".into(),
            message: "This is a message".into(),
            honeypot: String::new(),
        };
        let errors = validate(&submission).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Name);
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let submission = Submission {
            email: "not-an-email".into(),
            ..valid_submission()
        };
        let errors = validate(&submission).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Email);
    }

    #[test]
    fn boundary_lengths_pass() {
        let submission = Submission {
            name: "Jo".into(),
            email: "jo@example.io".into(),
            subject: "12345".into(),
            message: "1234567890".into(),
            honeypot: String::new(),
        };
        assert!(validate(&submission).is_ok());
    }

    #[test]
    fn all_fields_reported_at_once() {
        let errors = validate(&Submission::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let submission = Submission {
            name: "Zoë".into(),
            subject: "héllo".into(),
            message: "mëssage 10".into(),
            ..valid_submission()
        };
        assert!(validate(&submission).is_ok());
    }

    #[test]
    fn payload_is_form_encoded_in_wire_order() {
        let payload = encode_payload(&valid_submission());
        assert_eq!(
            payload,
            "form-name=contact&name=Ada&email=ada%40example.com\
             &subject=Hello+there&message=This+is+a+message&bot-field="
        );
    }

    #[test]
    fn valid_submit_sends_exactly_once() {
        let mut sent = 0;
        let mut transport = |_: &str, _: &str| {
            sent += 1;
            Ok(200)
        };
        let mut form = ContactForm::new();
        let outcome = form.submit(&valid_submission(), "/", &mut transport, Instant::now());
        assert_eq!(outcome, SubmitOutcome::Sent(Phase::Success));
        assert_eq!(sent, 1);
    }

    #[test]
    fn invalid_submit_sends_nothing() {
        let mut sent = 0;
        let mut transport = |_: &str, _: &str| {
            sent += 1;
            Ok(200)
        };
        let mut form = ContactForm::new();
        let outcome = form.submit(
            &Submission {
                name: "A".into(),
                ..valid_submission()
            },
            "/",
            &mut transport,
            Instant::now(),
        );
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(sent, 0);
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn non_success_status_is_an_error_phase() {
        let mut transport = |_: &str, _: &str| Ok(500);
        let mut form = ContactForm::new();
        let outcome = form.submit(&valid_submission(), "/", &mut transport, Instant::now());
        assert_eq!(outcome, SubmitOutcome::Sent(Phase::Error));
    }

    #[test]
    fn transport_failure_is_an_error_phase() {
        let mut transport = |_: &str, _: &str| Err("connection refused".to_string());
        let mut form = ContactForm::new();
        let outcome = form.submit(&valid_submission(), "/", &mut transport, Instant::now());
        assert_eq!(outcome, SubmitOutcome::Sent(Phase::Error));
    }

    #[test]
    fn in_flight_submission_blocks_reentry() {
        let mut form = ContactForm::new();
        let request = form.begin(&valid_submission()).unwrap();
        assert!(!request.payload.is_empty());
        assert_eq!(form.phase(), Phase::Submitting);

        assert_eq!(
            form.begin(&valid_submission()).unwrap_err(),
            SubmitOutcome::AlreadySubmitting
        );

        form.resolve(Ok(200), Instant::now());
        assert_eq!(form.phase(), Phase::Success);
    }

    #[test]
    fn status_reverts_to_idle_after_five_seconds() {
        let start = Instant::now();
        let mut transport = |_: &str, _: &str| Ok(204);
        let mut form = ContactForm::new();
        form.submit(&valid_submission(), "/", &mut transport, start);
        assert_eq!(form.phase(), Phase::Success);

        form.tick(start + Duration::from_secs(4));
        assert_eq!(form.phase(), Phase::Success);

        form.tick(start + STATUS_REVERT);
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn error_also_reverts_after_five_seconds() {
        let start = Instant::now();
        let mut transport = |_: &str, _: &str| Err("boom".to_string());
        let mut form = ContactForm::new();
        form.submit(&valid_submission(), "/", &mut transport, start);
        assert_eq!(form.phase(), Phase::Error);

        form.tick(start + Duration::from_secs(6));
        assert_eq!(form.phase(), Phase::Idle);
    }
}
