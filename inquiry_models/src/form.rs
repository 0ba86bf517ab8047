use std::{collections::BTreeMap, fmt, str::FromStr};

use thiserror::Error;

/// One of the four inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field {0:?}")]
pub struct UnknownFieldId(pub String);

impl FromStr for FieldId {
    type Err = UnknownFieldId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldId(s.into()))
    }
}

/// The current text of every input. The initial state is all empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Subject => &mut self.subject,
            FieldId::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Messages of the failed validation rules per field, in rule declaration
/// order.
///
/// Fields without any declared rules are never present and always report an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState(BTreeMap<FieldId, Vec<&'static str>>);

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, errors: Vec<&'static str>) {
        self.0.insert(field, errors);
    }

    pub fn errors(&self, field: FieldId) -> &[&'static str] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// The message that is shown next to the input.
    pub fn first_error(&self, field: FieldId) -> Option<&'static str> {
        self.errors(field).first().copied()
    }

    pub fn has_errors(&self) -> bool {
        self.0.values().any(|errors| !errors.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &[&'static str])> {
        self.0.iter().map(|(&field, errors)| (field, errors.as_slice()))
    }
}

impl FromIterator<(FieldId, Vec<&'static str>)> for ErrorState {
    fn from_iter<T: IntoIterator<Item = (FieldId, Vec<&'static str>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
