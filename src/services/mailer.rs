//! mailto composition and hand-off to the system mail handler.
//!
//! The contact form never performs a network send: it builds a `mailto:`
//! URI and delegates delivery to whatever mail client the platform opener
//! resolves. Whether a client is installed, or whether the user completes
//! sending, is unobservable from here.

use crate::error::{MailError, MailResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::process::{Command, Stdio};

/// Subject used when the form's subject field is left empty
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

/// Characters left unescaped in mailto components, matching JavaScript's
/// `encodeURIComponent`: alphanumerics plus `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one mailto query component
fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Build a `mailto:` URI with percent-encoded subject and body
pub fn compose_mailto(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        encode_component(subject),
        encode_component(body)
    )
}

/// Build the contact-form mailto: fixed body template, default subject
/// when the subject field is empty.
pub fn contact_mailto(to: &str, name: &str, email: &str, subject: &str, message: &str) -> String {
    let subject = if subject.is_empty() {
        DEFAULT_SUBJECT
    } else {
        subject
    };
    let body = format!("Hi William,\n\n{message}\n\nBest regards,\n{name}\n{email}");
    compose_mailto(to, subject, &body)
}

/// Hands URIs to the platform opener
pub struct Mailer;

impl Mailer {
    /// Platform opener command for URIs
    fn opener() -> MailResult<&'static str> {
        if cfg!(target_os = "macos") {
            Ok("open")
        } else if cfg!(target_os = "linux") {
            Ok("xdg-open")
        } else if cfg!(target_os = "windows") {
            Ok("explorer")
        } else {
            Err(MailError::NoOpener)
        }
    }

    /// Open a URI with the system handler. Fire-and-forget: success only
    /// means the opener launched, not that any mail was sent.
    pub fn open(uri: &str) -> MailResult<()> {
        let opener = Self::opener()?;
        Command::new(opener)
            .arg(uri)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| MailError::SpawnFailed(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_decode(s: &str) -> String {
        percent_encoding::percent_decode_str(s)
            .decode_utf8()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_contact_mailto_defaults_subject() {
        let uri = contact_mailto(
            "wacostal@macalester.edu",
            "Ada",
            "ada@example.com",
            "",
            "Hello",
        );
        assert!(uri.starts_with("mailto:wacostal@macalester.edu?subject="));

        let subject = uri
            .split("subject=")
            .nth(1)
            .unwrap()
            .split('&')
            .next()
            .unwrap();
        assert_eq!(percent_decode(subject), "Portfolio Contact");
    }

    #[test]
    fn test_contact_mailto_body_template() {
        let uri = contact_mailto(
            "wacostal@macalester.edu",
            "Ada",
            "ada@example.com",
            "",
            "Hello",
        );
        let body = uri.split("body=").nth(1).unwrap();
        assert_eq!(
            percent_decode(body),
            "Hi William,\n\nHello\n\nBest regards,\nAda\nada@example.com"
        );
    }

    #[test]
    fn test_explicit_subject_kept() {
        let uri = contact_mailto("x@y.z", "Ada", "ada@example.com", "Job chat", "Hi");
        let subject = uri
            .split("subject=")
            .nth(1)
            .unwrap()
            .split('&')
            .next()
            .unwrap();
        assert_eq!(percent_decode(subject), "Job chat");
    }

    #[test]
    fn test_component_encoding() {
        // Spaces become %20 (not +), newlines %0A; unreserved marks survive
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a\nb"), "a%0Ab");
        assert_eq!(encode_component("it's-ok.txt!"), "it's-ok.txt!");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }
}
