//! Scopes that select which relation vocabulary applies.

use std::fmt;

/// A value that can act as the context of a resource.
///
/// The name is the stable identity used by the [`Registry`](crate::Registry)
/// and by token rules. Values of the same kind usually share a name, e.g.
/// every group returns `"group"`, so relations are registered once per kind.
pub trait Scope {
    fn name(&self) -> &str;
}

impl Scope for &str {
    fn name(&self) -> &str {
        self
    }
}

impl Scope for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// The context a relation is evaluated in.
#[derive(Clone, Copy, Default)]
pub enum Context<'a> {
    /// The global context. Always resolvable, named `""`.
    #[default]
    Global,
    Scoped(&'a dyn Scope),
}

impl<'a> Context<'a> {
    pub const GLOBAL_NAME: &'static str = "";

    pub fn name(&self) -> &'a str {
        match *self {
            Self::Global => Self::GLOBAL_NAME,
            Self::Scoped(scope) => scope.name(),
        }
    }

    /// Returns `true` for the global context, or a scope named like it.
    pub fn is_global(&self) -> bool {
        self.name() == Self::GLOBAL_NAME
    }

    pub fn scope(&self) -> Option<&'a dyn Scope> {
        match *self {
            Self::Global => None,
            Self::Scoped(scope) => Some(scope),
        }
    }
}

impl<'a, S: Scope> From<&'a S> for Context<'a> {
    fn from(scope: &'a S) -> Self {
        Self::Scoped(scope)
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("Global"),
            Self::Scoped(scope) => f.debug_tuple("Scoped").field(&scope.name()).finish(),
        }
    }
}

impl PartialEq for Context<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}
