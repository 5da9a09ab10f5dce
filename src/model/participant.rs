//! Participant identity and relationship data.

use std::collections::BTreeMap;

/// A participant in the exchange.
///
/// `name` is the graph node key and must be unique within a [`Roster`].
/// `email` is carried for notification collaborators and never read by the
/// engine.
///
/// [`Roster`]: super::Roster
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub name: String,
    pub email: String,
    /// Relationship tag to ordered participant names. Order is significant
    /// for [`Comparator::Equality`](super::Comparator::Equality).
    #[cfg_attr(feature = "serde", serde(default))]
    pub relationships: BTreeMap<String, Vec<String>>,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            relationships: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the list stored under `key`.
    pub fn with_relationship<I, S>(mut self, key: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relationships
            .insert(key.into(), names.into_iter().map(Into::into).collect());
        self
    }

    /// Names stored under `key`, or an empty slice when the tag is absent.
    pub fn related(&self, key: &str) -> &[String] {
        self.relationships
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
