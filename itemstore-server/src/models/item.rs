//! Item identifiers, names, and the validated create/update input

use std::fmt;

use super::ValidationError;

/// Item identifier taken from a request path.
///
/// Ids are assigned by storage as a serial integer and exposed to clients
/// as their decimal string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(i64);

impl ItemId {
    /// Parse a path segment into an id.
    ///
    /// Only an optional `-` followed by ASCII digits is accepted; a leading
    /// `+` is rejected so each id has exactly one spelling.
    ///
    /// # Example
    /// ```
    /// use itemstore_server::models::ItemId;
    ///
    /// assert_eq!(ItemId::parse("42").unwrap().get(), 42);
    /// assert!(ItemId::parse("forty-two").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        if s.starts_with('+') {
            return Err(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            });
        }

        s.parse::<i64>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated item name (non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// Whitespace-only names count as empty. Names are stored as given,
    /// without trimming. Duplicates are allowed.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated input for create and update.
///
/// Update is a full replacement, so a draft without a description clears
/// the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: ItemName,
    pub description: Option<String>,
}

impl ItemDraft {
    pub fn new(name: ItemName, description: Option<String>) -> Self {
        Self { name, description }
    }
}
