//! Ordinal privilege and access level types.
//!
//! Both ordinals live in the same numeric space: a [`Privilege`] satisfies an
//! [`AccessLevel`] when its ordinal is greater than or equal to the level's.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strength of a resolved relation. Higher is more privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "OrdinalRepr", into = "i32")]
pub struct Privilege(i32);

impl Privilege {
    /// Actively distrusted. Below every legitimate access level.
    pub const BAD_RELATION: Self = Self(0);
    pub const ANYONE: Self = Self(1);
    pub const LOW_FAMILIAR: Self = Self(2);
    pub const MEDIUM_FAMILIAR: Self = Self(3);
    pub const HIGH_FAMILIAR: Self = Self(4);
    pub const TOP_FAMILIAR: Self = Self(5);
    pub const LOCAL_MODERATOR: Self = Self(6);
    pub const MODERATOR: Self = Self(7);
    pub const LOCAL_ADMIN: Self = Self(8);
    pub const ADMIN: Self = Self(9);
    pub const SELF: Self = Self(10);

    /// The largest constructible privilege, one below [`AccessLevel::NOT_SUPPORT`].
    pub const MAX: Self = Self(i32::MAX - 1);

    const NAMES: [(&'static str, Self); 11] = [
        ("bad_relation", Self::BAD_RELATION),
        ("anyone", Self::ANYONE),
        ("low_familiar", Self::LOW_FAMILIAR),
        ("medium_familiar", Self::MEDIUM_FAMILIAR),
        ("high_familiar", Self::HIGH_FAMILIAR),
        ("top_familiar", Self::TOP_FAMILIAR),
        ("local_moderator", Self::LOCAL_MODERATOR),
        ("moderator", Self::MODERATOR),
        ("local_admin", Self::LOCAL_ADMIN),
        ("admin", Self::ADMIN),
        ("self", Self::SELF),
    ];

    /// Creates a privilege from a raw ordinal, clamped to [`Privilege::MAX`].
    pub const fn new(value: i32) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns `true` if this privilege is high enough for `level`.
    pub const fn satisfies(self, level: AccessLevel) -> bool {
        self.0 >= level.0
    }

    /// The recommended privileges with their snake_case names.
    pub fn recommended() -> impl Iterator<Item = (&'static str, Self)> {
        Self::NAMES.into_iter()
    }
}

impl From<Privilege> for i32 {
    fn from(privilege: Privilege) -> Self {
        privilege.0
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::NAMES.iter().find(|(_, p)| p == self) {
            Some((name, _)) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Privilege {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lookup(&Self::NAMES, s)
            .or_else(|| s.trim().parse().ok().map(Self::new))
            .ok_or_else(|| Error::Parse(format!("unknown privilege {s:?}")))
    }
}

impl TryFrom<OrdinalRepr> for Privilege {
    type Error = Error;

    fn try_from(repr: OrdinalRepr) -> Result<Self> {
        match repr {
            OrdinalRepr::Ordinal(value) => Ok(Self::new(value)),
            OrdinalRepr::Name(name) => name.parse(),
        }
    }
}

/// Minimum privilege an action demands on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "OrdinalRepr", into = "i32")]
pub struct AccessLevel(i32);

impl AccessLevel {
    pub const PUBLIC: Self = Self(1);
    pub const LOW_PRIVATE: Self = Self(2);
    pub const MEDIUM_PRIVATE: Self = Self(3);
    pub const HIGH_PRIVATE: Self = Self(4);
    pub const TOP_PRIVATE: Self = Self(5);
    pub const LOW_CONFIDENTIAL: Self = Self(6);
    pub const HIGH_CONFIDENTIAL: Self = Self(7);
    pub const LOW_SECRET: Self = Self(8);
    pub const HIGH_SECRET: Self = Self(9);
    pub const TOP_SECRET: Self = Self(10);

    /// The action is not supported. No privilege satisfies it.
    pub const NOT_SUPPORT: Self = Self(i32::MAX);

    const NAMES: [(&'static str, Self); 11] = [
        ("public", Self::PUBLIC),
        ("low_private", Self::LOW_PRIVATE),
        ("medium_private", Self::MEDIUM_PRIVATE),
        ("high_private", Self::HIGH_PRIVATE),
        ("top_private", Self::TOP_PRIVATE),
        ("low_confidential", Self::LOW_CONFIDENTIAL),
        ("high_confidential", Self::HIGH_CONFIDENTIAL),
        ("low_secret", Self::LOW_SECRET),
        ("high_secret", Self::HIGH_SECRET),
        ("top_secret", Self::TOP_SECRET),
        ("not_support", Self::NOT_SUPPORT),
    ];

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<AccessLevel> for i32 {
    fn from(level: AccessLevel) -> Self {
        level.0
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::NAMES.iter().find(|(_, l)| l == self) {
            Some((name, _)) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for AccessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lookup(&Self::NAMES, s)
            .or_else(|| s.trim().parse().ok().map(Self::new))
            .ok_or_else(|| Error::Parse(format!("unknown access level {s:?}")))
    }
}

impl TryFrom<OrdinalRepr> for AccessLevel {
    type Error = Error;

    fn try_from(repr: OrdinalRepr) -> Result<Self> {
        match repr {
            OrdinalRepr::Ordinal(value) => Ok(Self::new(value)),
            OrdinalRepr::Name(name) => name.parse(),
        }
    }
}

/// Ordinals are written either as a number or as a recommended name.
#[derive(Deserialize)]
#[serde(untagged)]
enum OrdinalRepr {
    Ordinal(i32),
    Name(String),
}

fn lookup<T: Copy>(names: &[(&'static str, T)], s: &str) -> Option<T> {
    let s = s.trim();
    names
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_relation_is_below_every_recommended_level() {
        assert!(!Privilege::BAD_RELATION.satisfies(AccessLevel::PUBLIC));
        assert!(Privilege::ANYONE.satisfies(AccessLevel::PUBLIC));
    }

    #[test]
    fn not_support_beats_every_privilege() {
        assert!(!Privilege::SELF.satisfies(AccessLevel::NOT_SUPPORT));
        assert!(!Privilege::MAX.satisfies(AccessLevel::NOT_SUPPORT));
        assert!(!Privilege::new(i32::MAX).satisfies(AccessLevel::NOT_SUPPORT));
    }

    #[test]
    fn satisfies_is_ordinal() {
        for p in 0..=10 {
            for a in 1..=10 {
                assert_eq!(
                    Privilege::new(p).satisfies(AccessLevel::new(a)),
                    p >= a,
                    "privilege {p} vs level {a}"
                );
            }
        }
    }

    #[test]
    fn parse_names_and_ordinals() {
        assert_eq!("self".parse::<Privilege>().unwrap(), Privilege::SELF);
        assert_eq!("Low_Familiar".parse::<Privilege>().unwrap(), Privilege::LOW_FAMILIAR);
        assert_eq!("42".parse::<Privilege>().unwrap(), Privilege::new(42));
        assert_eq!("high_secret".parse::<AccessLevel>().unwrap(), AccessLevel::HIGH_SECRET);
        assert!("root".parse::<Privilege>().is_err());
        assert!("everything".parse::<AccessLevel>().is_err());
    }

    #[test]
    fn display_uses_recommended_names() {
        assert_eq!(Privilege::LOCAL_ADMIN.to_string(), "local_admin");
        assert_eq!(Privilege::new(77).to_string(), "77");
        assert_eq!(AccessLevel::NOT_SUPPORT.to_string(), "not_support");
    }

    #[test]
    fn serde_accepts_names_and_numbers() {
        let p: Privilege = serde_json::from_str("\"moderator\"").unwrap();
        assert_eq!(p, Privilege::MODERATOR);

        let a: AccessLevel = serde_json::from_str("9").unwrap();
        assert_eq!(a, AccessLevel::HIGH_SECRET);

        assert_eq!(serde_json::to_string(&Privilege::ADMIN).unwrap(), "9");
        assert!(serde_json::from_str::<Privilege>("\"overlord\"").is_err());
    }
}
