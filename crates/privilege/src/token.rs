//! Least-privilege delegation tokens.

use crate::{Action, Delegatee, Relation, Resource};
use std::collections::HashMap;
use tracing::trace;

/// Key of a token rule. `None` in any position is a wildcard.
///
/// The scope is either a resource name or a context name. An empty scope is
/// the wildcard, so resources in the global context (named `""`) are matched
/// by scope-wildcarded rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuleKey {
    pub action: Option<Action>,
    pub relation: Option<Relation>,
    pub scope: Option<String>,
}

impl RuleKey {
    pub fn new(action: Option<Action>, relation: Option<Relation>, scope: Option<String>) -> Self {
        Self {
            action,
            relation,
            scope,
        }
    }
}

/// A [`Delegatee`] that follows the principle of least privilege.
///
/// A fresh token denies everything. Rules allow or ban a combination of
/// action, relation and scope, and a ban always wins over an allow. Each rule
/// overwrites any earlier rule stored under exactly the same key.
///
/// Build the token first, then share it by reference with the checkers that
/// use it.
#[derive(Debug, Clone, Default)]
pub struct Token {
    rules: HashMap<RuleKey, bool>,
}

impl Token {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow every relation to perform `action` in every scope.
    pub fn allow_action(&mut self, action: Action) -> &mut Self {
        self.set(Some(action), None, None, true)
    }

    /// Allow every relation to perform every action in `scope`.
    pub fn allow_scope(&mut self, scope: &str) -> &mut Self {
        self.set(None, None, Some(scope), true)
    }

    /// Allow `relation` to perform every action in `scope`.
    pub fn allow_relation(&mut self, relation: impl Into<Relation>, scope: &str) -> &mut Self {
        self.set(None, Some(relation.into()), Some(scope), true)
    }

    /// Allow every relation to perform `action` in `scope`.
    pub fn allow_action_in_scope(&mut self, scope: &str, action: Action) -> &mut Self {
        self.set(Some(action), None, Some(scope), true)
    }

    /// Allow `relation` to perform `action` in `scope`.
    pub fn allow(
        &mut self,
        relation: impl Into<Relation>,
        scope: &str,
        action: Action,
    ) -> &mut Self {
        self.set(Some(action), Some(relation.into()), Some(scope), true)
    }

    /// Ban every relation from performing `action` in every scope.
    pub fn ban_action(&mut self, action: Action) -> &mut Self {
        self.set(Some(action), None, None, false)
    }

    /// Ban every relation from performing every action in `scope`.
    pub fn ban_scope(&mut self, scope: &str) -> &mut Self {
        self.set(None, None, Some(scope), false)
    }

    /// Ban `relation` from performing every action in `scope`.
    pub fn ban_relation(&mut self, relation: impl Into<Relation>, scope: &str) -> &mut Self {
        self.set(None, Some(relation.into()), Some(scope), false)
    }

    /// Ban every relation from performing `action` in `scope`.
    pub fn ban_action_in_scope(&mut self, scope: &str, action: Action) -> &mut Self {
        self.set(Some(action), None, Some(scope), false)
    }

    /// Ban `relation` from performing `action` in `scope`.
    pub fn ban(
        &mut self,
        relation: impl Into<Relation>,
        scope: &str,
        action: Action,
    ) -> &mut Self {
        self.set(Some(action), Some(relation.into()), Some(scope), false)
    }

    /// Store a rule under exactly `key`.
    pub fn set_rule(&mut self, key: RuleKey, allow: bool) -> &mut Self {
        self.rules.insert(key, allow);
        self
    }

    pub fn rule(&self, key: &RuleKey) -> Option<bool> {
        self.rules.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // Empty components are wildcards.
    fn set(
        &mut self,
        action: Option<Action>,
        relation: Option<Relation>,
        scope: Option<&str>,
        allow: bool,
    ) -> &mut Self {
        let key = RuleKey {
            action: action.filter(|a| !a.is_empty()),
            relation: relation.filter(|r| !r.is_empty()),
            scope: scope.filter(|s| !s.is_empty()).map(str::to_string),
        };
        self.set_rule(key, allow)
    }

    /// The nine candidate keys for a request, in precedence order.
    fn candidates(
        relation: &Relation,
        resource: &str,
        context: &str,
        action: &Action,
    ) -> [RuleKey; 9] {
        let action = Some(action.clone()).filter(|a| !a.is_empty());
        let relation = Some(relation.clone()).filter(|r| !r.is_empty());
        let resource = Some(resource.to_string()).filter(|s| !s.is_empty());
        let context = Some(context.to_string()).filter(|s| !s.is_empty());

        [
            // Full keys.
            RuleKey::new(action.clone(), relation.clone(), resource.clone()),
            RuleKey::new(action.clone(), relation.clone(), context.clone()),
            // Partial keys.
            RuleKey::new(None, relation.clone(), resource.clone()),
            RuleKey::new(None, relation, context.clone()),
            RuleKey::new(action.clone(), None, resource.clone()),
            RuleKey::new(action.clone(), None, context.clone()),
            // Single-component keys.
            RuleKey::new(None, None, resource),
            RuleKey::new(None, None, context),
            RuleKey::new(action, None, None),
        ]
    }
}

impl Delegatee for Token {
    fn evaluate(&self, relation: &Relation, resource: &dyn Resource, action: &Action) -> bool {
        let context = resource.context();
        let keys = Self::candidates(relation, resource.name(), context.name(), action);

        let mut allowed = false;
        for key in &keys {
            match self.rules.get(key) {
                Some(false) => {
                    trace!(?key, "banned by token");
                    return false;
                }
                Some(true) => {
                    trace!(?key, "allowed by token");
                    allowed = true;
                }
                None => {}
            }
        }
        allowed
    }
}
