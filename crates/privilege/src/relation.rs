//! Relation labels.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A case-insensitive label describing how a subject relates to an owner
/// within a context.
///
/// Relations carry no order of their own; they are resolved to a
/// [`Privilege`](crate::Privilege) through the [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Relation(String);

impl Relation {
    /// Label attributed to an anonymous requester.
    pub const ANYONE: &'static str = "anyone";

    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().to_lowercase())
    }

    pub fn anyone() -> Self {
        Self(Self::ANYONE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The empty relation, used as a wildcard in token rules.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Relation {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Relation {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<Relation> for String {
    fn from(relation: Relation) -> Self {
        relation.0
    }
}

impl Borrow<str> for Relation {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Relation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(Relation::new("SELF"), Relation::from("self"));
        assert_eq!(Relation::from("GroupMember".to_string()).as_str(), "groupmember");
    }

    #[test]
    fn anyone_label() {
        assert_eq!(Relation::anyone().as_str(), Relation::ANYONE);
        assert!(!Relation::anyone().is_empty());
        assert!(Relation::new("").is_empty());
    }
}
