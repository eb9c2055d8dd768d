use folio_models::contact::{
    ContactMessage, ContactMessageAuthor, ContactMessageAuthorName, ContactMessageContent,
    ContactMessageSubject,
};
use serde::Deserialize;

/// Raw contact form payload. Fields are checked for presence by hand so that
/// missing, `null` and `""` are all answered with the same rejection;
/// additional fields (the form's `reason`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactMessageFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ApiContactMessage {
    /// All four required fields, or `None` if any is absent or empty.
    /// Values are not trimmed; whitespace-only counts as present.
    pub fn require_fields(self) -> Option<ContactMessageFields> {
        let filled = |value: Option<String>| value.filter(|s| !s.is_empty());

        Some(ContactMessageFields {
            name: filled(self.name)?,
            email: filled(self.email)?,
            subject: filled(self.subject)?,
            message: filled(self.message)?,
        })
    }
}

impl TryFrom<ContactMessageFields> for ContactMessage {
    type Error = anyhow::Error;

    fn try_from(value: ContactMessageFields) -> Result<Self, Self::Error> {
        Ok(Self {
            author: ContactMessageAuthor {
                name: ContactMessageAuthorName::try_new(value.name)?,
                email: value.email.parse()?,
            },
            subject: ContactMessageSubject::try_new(value.subject)?,
            content: ContactMessageContent::try_new(value.message)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_fields_complete() {
        let fields = request(Some("a"), Some("b@c.d"), Some("e"), Some("f"))
            .require_fields()
            .unwrap();
        assert_eq!(fields.name, "a");
        assert_eq!(fields.message, "f");
    }

    #[test]
    fn require_fields_rejects_missing_and_empty() {
        assert!(request(None, Some("b@c.d"), Some("e"), Some("f"))
            .require_fields()
            .is_none());
        assert!(request(Some("a"), Some(""), Some("e"), Some("f"))
            .require_fields()
            .is_none());
    }

    #[test]
    fn require_fields_keeps_whitespace() {
        // Whitespace-only counts as present; trimming is the form's concern.
        assert!(request(Some(" "), Some("b@c.d"), Some("e"), Some("f"))
            .require_fields()
            .is_some());
    }

    fn request(
        name: Option<&str>,
        email: Option<&str>,
        subject: Option<&str>,
        message: Option<&str>,
    ) -> ApiContactMessage {
        ApiContactMessage {
            name: name.map(Into::into),
            email: email.map(Into::into),
            subject: subject.map(Into::into),
            message: message.map(Into::into),
        }
    }
}
