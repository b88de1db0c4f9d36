use nutype::nutype;

use crate::email_address::EmailAddress;

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
}

/// Display name of the sender, also used in the `Reply-To` header of the
/// relayed email. Must not contain control characters.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = 256,
        predicate = |name| !name.chars().any(char::is_control),
    ),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;

    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = ContactName::try_from("  Ana  ").unwrap();
        assert_eq!(*name, "Ana");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_matches!(
            ContactName::try_from("   "),
            Err(ContactNameError::NotEmptyViolated)
        );
    }

    #[test]
    fn name_with_control_character_is_rejected() {
        for name in ["Ana\nReyes", "Ana\r\nBcc: victim@example.org", "Ana\u{7}"] {
            assert_matches!(
                ContactName::try_from(name),
                Err(ContactNameError::PredicateViolated)
            );
        }
    }

    #[test]
    fn long_message_is_rejected() {
        let content = "x".repeat(4097);
        assert_matches!(
            ContactMessageContent::try_from(content),
            Err(ContactMessageContentError::LenCharMaxViolated)
        );
    }

    #[test]
    fn message_keeps_markup_verbatim() {
        let content = ContactMessageContent::try_from("<b>Hello</b>\nWorld").unwrap();
        assert_eq!(*content, "<b>Hello</b>\nWorld");
    }
}
