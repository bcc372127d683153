//! Capability contracts for subjects, resources and delegatees.
//!
//! The decision engine only ever talks to these traits. A resource declares
//! how its access levels are computed through [`Resource::permission`], which
//! hands back exactly one of the two shapes:
//!
//! ```text
//! Permission::Static   -> level = f(action)
//! Permission::Dynamic  -> level = f(subject, action)
//! ```
//!
//! A resource that returns neither is a wiring defect and every decision on it
//! fails with [`Error::Configuration`](crate::Error::Configuration).

use crate::{AccessLevel, Action, Context, Relation};

/// An entity that wants to perform actions on resources.
pub trait Subject {
    /// Identity used in diagnostics.
    fn name(&self) -> &str;

    /// The relation of this subject over `other` within `context`.
    ///
    /// `other` is the owner of the resource being accessed, if any.
    fn relation(&self, context: Context<'_>, other: Option<&dyn Subject>) -> Relation;
}

/// An entity protected from illegal actions.
pub trait Resource {
    /// Identity used to scope token rules, typically the resource kind.
    fn name(&self) -> &str;

    fn context(&self) -> Context<'_> {
        Context::Global
    }

    fn owner(&self) -> Option<&dyn Subject> {
        None
    }

    /// The shape this resource computes access levels with.
    fn permission(&self) -> Option<Permission<'_>> {
        None
    }
}

/// Access levels based on the action only.
pub trait StaticPermission {
    fn permission(&self, action: &Action) -> AccessLevel;
}

/// Access levels based on both the action and the requesting subject.
///
/// The subject is `None` for anonymous requests.
pub trait DynamicPermission {
    fn permission(&self, subject: Option<&dyn Subject>, action: &Action) -> AccessLevel;
}

/// The permission shape of a resource.
#[derive(Clone, Copy)]
pub enum Permission<'a> {
    Static(&'a dyn StaticPermission),
    Dynamic(&'a dyn DynamicPermission),
}

impl Permission<'_> {
    /// The access level `subject` needs to perform `action`.
    pub fn required(&self, subject: Option<&dyn Subject>, action: &Action) -> AccessLevel {
        match self {
            Self::Static(p) => p.permission(action),
            Self::Dynamic(p) => p.permission(subject, action),
        }
    }
}

/// A narrowing layer that may veto a decision.
pub trait Delegatee {
    /// Returns `false` to veto `relation` performing `action` on `resource`.
    fn evaluate(&self, relation: &Relation, resource: &dyn Resource, action: &Action) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Group {
        id: String,
    }

    impl Subject for Group {
        fn name(&self) -> &str {
            &self.id
        }

        fn relation(&self, _context: Context<'_>, _other: Option<&dyn Subject>) -> Relation {
            Relation::anyone()
        }
    }

    struct Wiki;

    impl DynamicPermission for Wiki {
        fn permission(&self, subject: Option<&dyn Subject>, _action: &Action) -> AccessLevel {
            match subject {
                Some(_) => AccessLevel::PUBLIC,
                None => AccessLevel::NOT_SUPPORT,
            }
        }
    }

    #[test]
    fn dynamic_permission_sees_subject() {
        let group = Group { id: "g".to_string() };
        let shape = Permission::Dynamic(&Wiki);
        let action = Action::new(["read"]).unwrap();
        assert_eq!(shape.required(Some(&group), &action), AccessLevel::PUBLIC);
        assert_eq!(shape.required(None, &action), AccessLevel::NOT_SUPPORT);
    }
}
