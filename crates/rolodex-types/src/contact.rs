use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique contact identifier, assigned once at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContactId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The six editable contact fields.
///
/// Values are stored verbatim. Phone numbers are validated by the dialog
/// layer before they get here; the store never re-validates on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub work: String,
    #[serde(default)]
    pub mobile: String,
}

impl ContactFields {
    /// True when every field is empty. A contact must have at least one
    /// filled field to be worth storing.
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.patronymic.is_empty()
            && self.company.is_empty()
            && self.work.is_empty()
            && self.mobile.is_empty()
    }
}

/// One phone book entry: an immutable id plus its editable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    fields: ContactFields,
}

impl Contact {
    /// Construct a new contact with a freshly generated id
    pub fn new(fields: ContactFields) -> Self {
        Self {
            id: ContactId::generate(),
            fields,
        }
    }

    /// Reattach a stored id to its field record
    pub fn with_id(id: ContactId, fields: ContactFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Split the contact into its map key and value
    pub fn into_parts(self) -> (ContactId, ContactFields) {
        (self.id, self.fields)
    }

    /// Full name joined with single spaces. Empty parts keep their
    /// separators, so a missing patronymic leaves a trailing space.
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.fields.first_name, self.fields.last_name, self.fields.patronymic
        )
    }

    /// Multi-line display card annotated with a 1-based list index
    pub fn card_with_number(&self, index: usize) -> String {
        format!(
            "Contact card: {}\nFull name: {}\nCompany: {}\nWork: {}\nMobile: {}\n",
            index,
            self.full_name(),
            self.fields.company,
            self.fields.work,
            self.fields.mobile
        )
    }
}
