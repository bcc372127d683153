//! Relation registry.

use crate::{Checker, Context, Error, Privilege, Relation, Result, Subject};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Maps `(context, relation)` pairs to privileges.
///
/// Every context falls back to a default vocabulary made of the recommended
/// privilege names (`"badrelation"`, `"anyone"`, `"lowfamiliar"`, ...,
/// `"self"`). The global context is always resolvable; a named context only
/// becomes resolvable once a relation has been registered in it.
///
/// Registration needs `&mut Registry` and decisions borrow `&Registry`, so
/// the registry is populated during initialization and read afterwards. Wrap
/// it in an `Arc` to share it across threads once it is complete.
#[derive(Debug, Clone)]
pub struct Registry {
    contexts: HashMap<String, HashMap<Relation, Privilege>>,
    defaults: HashMap<Relation, Privilege>,
}

impl Registry {
    /// Create a registry holding only the default vocabulary.
    pub fn new() -> Self {
        let defaults = Privilege::recommended()
            .map(|(name, privilege)| (Relation::new(name.replace('_', "")), privilege))
            .collect();

        Self {
            contexts: HashMap::new(),
            defaults,
        }
    }

    /// Register `relation` in `context` with the given privilege.
    ///
    /// The first registration in a named context opens it for resolution.
    /// Registering the same relation twice overwrites the first privilege.
    pub fn register<'c>(
        &mut self,
        context: impl Into<Context<'c>>,
        relation: impl Into<Relation>,
        privilege: Privilege,
    ) {
        let context = context.into();
        self.register_in(context.name(), relation.into(), privilege);
    }

    pub(crate) fn register_in(&mut self, context: &str, relation: Relation, privilege: Privilege) {
        debug!(context, %relation, %privilege, "registering relation");
        self.contexts
            .entry(context.to_string())
            .or_default()
            .insert(relation, privilege);
    }

    /// Resolve `relation` within `context`.
    ///
    /// The context's own relations take precedence over the default
    /// vocabulary.
    pub fn resolve(&self, context: Context<'_>, relation: &Relation) -> Result<Privilege> {
        let name = context.name();
        let scoped = self.contexts.get(name);

        if scoped.is_none() && name != Context::GLOBAL_NAME {
            warn!(context = name, "resolving relation in an unregistered context");
            return Err(Error::UnknownContext(name.to_string()));
        }

        scoped
            .and_then(|relations| relations.get(relation))
            .or_else(|| self.defaults.get(relation))
            .copied()
            .ok_or_else(|| {
                warn!(context = name, %relation, "unknown relation");
                Error::UnknownRelation {
                    relation: relation.to_string(),
                    context: name.to_string(),
                }
            })
    }

    /// Returns `true` if relations can be resolved in `context`.
    pub fn is_open(&self, context: Context<'_>) -> bool {
        context.is_global() || self.contexts.contains_key(context.name())
    }

    /// Start a decision for `subject` against this registry.
    pub fn check<'r>(&'r self, subject: &'r dyn Subject) -> Checker<'r> {
        Checker::new(self, subject)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_resolves_everywhere_open() {
        let registry = Registry::new();
        let privilege = registry
            .resolve(Context::Global, &Relation::new("LocalAdmin"))
            .unwrap();
        assert_eq!(privilege, Privilege::LOCAL_ADMIN);
        assert_eq!(
            registry.resolve(Context::Global, &Relation::new("badrelation")).unwrap(),
            Privilege::BAD_RELATION
        );
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let mut registry = Registry::new();
        registry.register(&"group", "Owner", Privilege::SELF);

        let ctx = Context::from(&"group");
        assert_eq!(registry.resolve(ctx, &"OWNER".into()).unwrap(), Privilege::SELF);
        assert_eq!(registry.resolve(ctx, &"owner".into()).unwrap(), Privilege::SELF);
    }

    #[test]
    fn context_relations_shadow_defaults() {
        let mut registry = Registry::new();
        registry.register(&"group", "admin", Privilege::LOCAL_ADMIN);

        let group = Context::from(&"group");
        assert_eq!(registry.resolve(group, &"admin".into()).unwrap(), Privilege::LOCAL_ADMIN);
        assert_eq!(
            registry.resolve(Context::Global, &"admin".into()).unwrap(),
            Privilege::ADMIN
        );
        assert_eq!(registry.resolve(group, &"moderator".into()).unwrap(), Privilege::MODERATOR);
    }

    #[test]
    fn unregistered_named_context_fails() {
        let registry = Registry::new();
        let err = registry
            .resolve(Context::from(&"forum"), &"self".into())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownContext(ref name) if name == "forum"));
        assert!(!registry.is_open(Context::from(&"forum")));
    }

    #[test]
    fn global_context_is_always_open() {
        let registry = Registry::new();
        assert!(registry.is_open(Context::Global));
        assert!(registry.resolve(Context::Global, &"anyone".into()).is_ok());
    }

    #[test]
    fn unknown_relation_fails() {
        let mut registry = Registry::new();
        registry.register(&"group", "member", Privilege::LOW_FAMILIAR);

        let err = registry
            .resolve(Context::from(&"group"), &"stranger".into())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownRelation { .. }));

        // Relations of one context do not leak into another.
        let err = registry
            .resolve(Context::Global, &"member".into())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownRelation { .. }));
    }

    #[test]
    fn later_registration_overwrites() {
        let mut registry = Registry::new();
        registry.register(Context::Global, "friend", Privilege::LOW_FAMILIAR);
        registry.register(Context::Global, "FRIEND", Privilege::HIGH_FAMILIAR);
        assert_eq!(
            registry.resolve(Context::Global, &"friend".into()).unwrap(),
            Privilege::HIGH_FAMILIAR
        );
    }
}
