//! Action paths.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An ordered path of action segments, e.g. `["create", "admin"]`.
///
/// Segments are joined with [`Action::SEPARATOR`] when an action is written
/// as a single string, so no segment may contain it. This keeps
/// `["create", "admin"]` and `["create:admin"]` from colliding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Action {
    segments: Vec<String>,
}

impl Action {
    pub const SEPARATOR: char = ':';

    /// Build an action from its segments.
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if let Some(bad) = segments.iter().find(|s| s.contains(Self::SEPARATOR)) {
            return Err(Error::Configuration(format!(
                "action segment {bad:?} contains the separator '{}'",
                Self::SEPARATOR
            )));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The empty path, used as a wildcard in token rules.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        Self::new(s.split(Self::SEPARATOR))
    }
}
