use std::sync::LazyLock;

use regex::Regex;

use super::ValidationState;

pub const NAME_TRIMMED_MIN_LEN: usize = 2;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const MESSAGE_TRIMMED_MIN_LEN: usize = 10;

// `local@domain.tld` where no part holds `@` or browser whitespace
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^@\s\x{FEFF}--\x{85}]+@[^@\s\x{FEFF}--\x{85}]+\.[^@\s\x{FEFF}--\x{85}]+$",
    )
    .expect("EMAIL_PATTERN failed")
});

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NameError {
    MinLength(usize, usize),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EmailError {
    Pattern,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PhoneError {
    MinDigits(usize, usize),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MessageError {
    MinLength(usize, usize),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    /// element id of the input, error labels use `{id}-error`
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Please enter your name (at least 2 characters)",
            Self::Email => "Please enter a valid email address",
            Self::Phone => "Please enter a valid phone number (at least 10 digits)",
            Self::Message => "Please enter a message (at least 10 characters)",
        }
    }
}

/// Per field result of the contact form rules.
///
/// Every check recomputes from the text it is given, nothing is cached
/// between calls.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct ContactValidation {
    pub name: ValidationState<NameError>,
    pub email: ValidationState<EmailError>,
    pub phone: ValidationState<PhoneError>,
    pub message: ValidationState<MessageError>,
}

impl ContactValidation {
    pub fn check(&mut self, field: Field, v: &str) -> bool {
        match field {
            Field::Name => {
                self.name = Self::check_name(v);
                self.name.is_valid()
            }
            Field::Email => {
                self.email = Self::check_email(v);
                self.email.is_valid()
            }
            Field::Phone => {
                self.phone = Self::check_phone(v);
                self.phone.is_valid()
            }
            Field::Message => {
                self.message = Self::check_message(v);
                self.message.is_valid()
            }
        }
    }

    #[must_use]
    pub fn is_valid(field: Field, v: &str) -> bool {
        match field {
            Field::Name => Self::check_name(v).is_valid(),
            Field::Email => Self::check_email(v).is_valid(),
            Field::Phone => Self::check_phone(v).is_valid(),
            Field::Message => Self::check_message(v).is_valid(),
        }
    }

    #[must_use]
    pub const fn has_error(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name.is_invalid(),
            Field::Email => self.email.is_invalid(),
            Field::Phone => self.phone.is_invalid(),
            Field::Message => self.message.is_invalid(),
        }
    }

    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.name.is_invalid()
            || self.email.is_invalid()
            || self.phone.is_invalid()
            || self.message.is_invalid()
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = ValidationState::Unused,
            Field::Email => self.email = ValidationState::Unused,
            Field::Phone => self.phone = ValidationState::Unused,
            Field::Message => self.message = ValidationState::Unused,
        }
    }

    #[must_use]
    pub fn check_name(v: &str) -> ValidationState<NameError> {
        let trimmed_len = browser_len(v);

        if trimmed_len < NAME_TRIMMED_MIN_LEN {
            ValidationState::Invalid(NameError::MinLength(trimmed_len, NAME_TRIMMED_MIN_LEN))
        } else {
            ValidationState::Valid
        }
    }

    #[must_use]
    pub fn check_email(v: &str) -> ValidationState<EmailError> {
        if EMAIL_PATTERN.is_match(browser_trim(v)) {
            ValidationState::Valid
        } else {
            ValidationState::Invalid(EmailError::Pattern)
        }
    }

    #[must_use]
    pub fn check_phone(v: &str) -> ValidationState<PhoneError> {
        let digits = v.chars().filter(char::is_ascii_digit).count();

        if digits < PHONE_MIN_DIGITS {
            ValidationState::Invalid(PhoneError::MinDigits(digits, PHONE_MIN_DIGITS))
        } else {
            ValidationState::Valid
        }
    }

    #[must_use]
    pub fn check_message(v: &str) -> ValidationState<MessageError> {
        let trimmed_len = browser_len(v);

        if trimmed_len < MESSAGE_TRIMMED_MIN_LEN {
            ValidationState::Invalid(MessageError::MinLength(
                trimmed_len,
                MESSAGE_TRIMMED_MIN_LEN,
            ))
        } else {
            ValidationState::Valid
        }
    }
}

/// Unicode white space the way browsers define it for `trim()` and `\s`,
/// which leaves out U+0085 and adds U+FEFF.
fn is_browser_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn browser_trim(v: &str) -> &str {
    v.trim_matches(is_browser_whitespace)
}

/// length after trimming, in UTF-16 code units as a browser counts it
fn browser_len(v: &str) -> usize {
    browser_trim(v).encode_utf16().count()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_rule() {
        assert!(!ContactValidation::is_valid(Field::Name, ""));
        assert!(!ContactValidation::is_valid(Field::Name, "a"));
        assert!(!ContactValidation::is_valid(Field::Name, "   a   "));
        assert!(ContactValidation::is_valid(Field::Name, "Al"));
        assert!(ContactValidation::is_valid(Field::Name, "  Jo  "));

        assert_eq!(
            ContactValidation::check_name(" x "),
            ValidationState::Invalid(NameError::MinLength(1, 2))
        );
    }

    #[test]
    fn test_name_counts_utf16_units() {
        assert!(!ContactValidation::is_valid(Field::Name, "\u{e9}"));
        assert!(ContactValidation::is_valid(Field::Name, "\u{e9}\u{e9}"));
        // one emoji is a surrogate pair
        assert!(ContactValidation::is_valid(Field::Name, "\u{1f600}"));
        assert_eq!(
            ContactValidation::check_message("\u{1f600}\u{1f600}\u{1f600}\u{1f600}"),
            ValidationState::Invalid(MessageError::MinLength(8, 10))
        );
    }

    #[test]
    fn test_trim_matches_browser_whitespace() {
        assert!(!ContactValidation::is_valid(Field::Name, "\u{feff}a\u{feff}"));
        assert!(!ContactValidation::is_valid(Field::Name, "\u{3000}a\u{a0}"));
        // NEL is not trimmed by browsers
        assert!(ContactValidation::is_valid(Field::Name, "a\u{85}"));
        assert!(ContactValidation::is_valid(Field::Email, "\u{feff}a@b.co\u{feff}"));
    }

    #[test]
    fn test_email_rule() {
        assert!(ContactValidation::is_valid(Field::Email, "a@b.co"));
        assert!(ContactValidation::is_valid(
            Field::Email,
            "first.last@mail.example.com"
        ));
        assert!(ContactValidation::is_valid(Field::Email, "  a@b.co  "));

        assert!(!ContactValidation::is_valid(Field::Email, "not-an-email"));
        assert!(!ContactValidation::is_valid(Field::Email, "user@domain"));
        assert!(!ContactValidation::is_valid(Field::Email, "a@@b.co"));
        assert!(!ContactValidation::is_valid(Field::Email, "a@b@c.co"));
        assert!(!ContactValidation::is_valid(Field::Email, "a b@c.co"));
        assert!(!ContactValidation::is_valid(Field::Email, "@b.co"));
        assert!(!ContactValidation::is_valid(Field::Email, "a@.co"));
        assert!(!ContactValidation::is_valid(Field::Email, "a@b."));
        assert!(!ContactValidation::is_valid(Field::Email, ""));
        assert!(!ContactValidation::is_valid(Field::Email, "a@b.co\nx@y.co"));
    }

    #[test]
    fn test_email_whitespace_follows_browser() {
        assert!(!ContactValidation::is_valid(Field::Email, "a\u{feff}b@c.co"));
        assert!(!ContactValidation::is_valid(Field::Email, "a\tb@c.co"));
        assert!(!ContactValidation::is_valid(Field::Email, "a@b\u{2003}c.co"));
        assert!(ContactValidation::is_valid(Field::Email, "a\u{85}b@c.co"));
    }

    #[test]
    fn test_phone_rule() {
        assert!(ContactValidation::is_valid(Field::Phone, "555-123-4567"));
        assert!(ContactValidation::is_valid(Field::Phone, "+255 (712) 345 678"));
        assert!(!ContactValidation::is_valid(Field::Phone, "555-1234"));

        assert_eq!(
            ContactValidation::check_phone("555-1234"),
            ValidationState::Invalid(PhoneError::MinDigits(7, 10))
        );
    }

    #[test]
    fn test_message_rule() {
        assert!(!ContactValidation::is_valid(Field::Message, "Hi"));
        assert!(!ContactValidation::is_valid(Field::Message, "   short   "));
        assert!(ContactValidation::is_valid(Field::Message, "Hello there!"));
    }

    #[test]
    fn test_check_updates_state() {
        let mut v = ContactValidation::default();
        assert!(!v.has_any());

        assert!(!v.check(Field::Phone, "123"));
        assert!(v.has_error(Field::Phone));
        assert!(!v.has_error(Field::Name));
        assert!(v.has_any());

        assert!(v.check(Field::Phone, "0123456789"));
        assert!(v.phone.is_valid());
        assert!(!v.has_any());

        v.clear(Field::Phone);
        assert!(v.phone.is_unused());
    }
}
