use proptest::prelude::*;

use folio::form::{encode_payload, validate, Submission, MIN_MESSAGE, MIN_NAME, MIN_SUBJECT};

fn submission_strategy() -> impl Strategy<Value = Submission> {
    (".*", ".*", ".*", ".*").prop_map(|(name, email, subject, message)| Submission {
        name,
        email,
        subject,
        message,
        honeypot: String::new(),
    })
}

proptest! {
    #[test]
    fn validate_never_panics(submission in submission_strategy()) {
        let _ = validate(&submission);
    }

    #[test]
    fn acceptance_matches_the_rules_exactly(submission in submission_strategy()) {
        let accepted = validate(&submission).is_ok();
        let expected = submission.name.chars().count() >= MIN_NAME
            && submission.subject.chars().count() >= MIN_SUBJECT
            && submission.message.chars().count() >= MIN_MESSAGE
            && {
                let parts: Vec<&str> = submission.email.splitn(2, '@').collect();
                let domain = parts.get(1).copied().unwrap_or("");
                let bytes = domain.as_bytes();
                parts.len() == 2
                    && !parts[0].is_empty()
                    && !parts[0].contains(char::is_whitespace)
                    && !domain.contains('@')
                    && !domain.contains(char::is_whitespace)
                    // some dot with at least one character on each side
                    && (1..bytes.len().saturating_sub(1)).any(|i| bytes[i] == b'.')
            };
        prop_assert_eq!(accepted, expected);
    }

    #[test]
    fn rejected_submissions_name_their_fields(submission in submission_strategy()) {
        if let Err(errors) = validate(&submission) {
            prop_assert!(!errors.is_empty());
            let mut fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            fields.dedup();
            prop_assert_eq!(fields.len(), errors.len(), "one error per field");
        }
    }

    #[test]
    fn payload_always_has_six_pairs(submission in submission_strategy()) {
        let payload = encode_payload(&submission);
        prop_assert_eq!(payload.split('&').count(), 6);
        prop_assert!(payload.starts_with("form-name=contact"));
        for pair in payload.split('&') {
            prop_assert!(pair.contains('='), "pair {} must be key=value", pair);
        }
    }
}
