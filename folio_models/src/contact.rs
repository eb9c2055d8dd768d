use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::email_address::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

/// Why the author is reaching out. Collected by the contact form but not
/// interpreted by the relay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactReason {
    #[default]
    Job,
    Project,
    Question,
    Other,
}

impl ContactReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Job => "job",
            Self::Project => "project",
            Self::Question => "question",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ContactReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContactReason {
    type Err = ParseContactReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job" => Ok(Self::Job),
            "project" => Ok(Self::Project),
            "question" => Ok(Self::Question),
            "other" => Ok(Self::Other),
            _ => Err(ParseContactReasonError(s.into())),
        }
    }
}

#[derive(Debug, Error)]
#[error("invalid contact reason: {0:?}")]
pub struct ParseContactReasonError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_name_rejects_empty() {
        assert!(ContactMessageAuthorName::try_new("").is_err());
        assert!(ContactMessageAuthorName::try_new("Jane Doe").is_ok());
    }

    #[test]
    fn reason_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContactReason::Project).unwrap(),
            "\"project\""
        );
        assert_eq!(
            serde_json::from_str::<ContactReason>("\"other\"").unwrap(),
            ContactReason::Other
        );
    }

    #[test]
    fn reason_defaults_to_job() {
        assert_eq!(ContactReason::default(), ContactReason::Job);
    }

    #[test]
    fn reason_round_trips_through_str() {
        for reason in [
            ContactReason::Job,
            ContactReason::Project,
            ContactReason::Question,
            ContactReason::Other,
        ] {
            assert_eq!(reason.to_string().parse::<ContactReason>().unwrap(), reason);
        }
        assert!("career".parse::<ContactReason>().is_err());
    }
}
