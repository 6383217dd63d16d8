use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(ContactId);

/// One address-book record as persisted on disk.
///
/// `comment` is always present in memory; a record written without the key
/// reads back with an empty comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub comment: String,
}

impl Contact {
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        phone: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            comment: comment.into(),
        }
    }

    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            comment: draft.comment,
        }
    }

    /// Replaces the fields present in `patch` and keeps the rest.
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(comment) = patch.comment {
            self.comment = comment;
        }
    }

    /// Values a search over `field` looks at; `All` covers every field.
    pub fn searchable(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Name => vec![&self.name],
            SearchField::Phone => vec![&self.phone],
            SearchField::Comment => vec![&self.comment],
            SearchField::All => vec![&self.name, &self.phone, &self.comment],
        }
    }
}

/// Raw name/phone/comment triple as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub comment: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            comment: comment.into(),
        }
    }
}

/// Input for a new contact, trimmed like an edit patch. Name and phone were
/// already checked non-empty by whoever collected them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub comment: String,
}

impl From<ContactFields> for ContactDraft {
    fn from(fields: ContactFields) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            comment: fields.comment.trim().to_string(),
        }
    }
}

/// Per-field update: `Some` replaces, `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub comment: Option<String>,
}

impl ContactPatch {
    /// Blank input means "keep what is there".
    pub fn from_fields(fields: ContactFields) -> Self {
        fn present(value: String) -> Option<String> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }

        Self {
            name: present(fields.name),
            phone: present(fields.phone),
            comment: present(fields.comment),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.comment.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Phone,
    Comment,
    #[default]
    All,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
