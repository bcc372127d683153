//! Map-backed resources.
//!
//! An [`AbstractResource`] stands in for a kind of resource that has no
//! dedicated type: its context, owner and per-action access levels are set at
//! runtime. A [`ResourceCatalog`] keeps them by name.

use crate::{AccessLevel, Action, Context, Permission, Resource, Scope, StaticPermission, Subject};
use std::collections::HashMap;
use std::fmt;

/// A resource whose access levels are stored in a table.
///
/// Actions without an entry are not supported.
pub struct AbstractResource {
    name: String,
    permissions: HashMap<Action, AccessLevel>,
    context: Option<Box<dyn Scope>>,
    owner: Option<Box<dyn Subject>>,
}

impl AbstractResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: HashMap::new(),
            context: None,
            owner: None,
        }
    }

    pub fn set_context(&mut self, context: impl Scope + 'static) -> &mut Self {
        self.context = Some(Box::new(context));
        self
    }

    /// Reset the context to the global one.
    pub fn clear_context(&mut self) -> &mut Self {
        self.context = None;
        self
    }

    pub fn set_owner(&mut self, owner: impl Subject + 'static) -> &mut Self {
        self.owner = Some(Box::new(owner));
        self
    }

    /// Set the access level required for `action`.
    pub fn set_permission(&mut self, level: AccessLevel, action: Action) -> &mut Self {
        self.permissions.insert(action, level);
        self
    }
}

impl Resource for AbstractResource {
    fn name(&self) -> &str {
        &self.name
    }

    fn context(&self) -> Context<'_> {
        match self.context.as_deref() {
            Some(scope) => Context::Scoped(scope),
            None => Context::Global,
        }
    }

    fn owner(&self) -> Option<&dyn Subject> {
        self.owner.as_deref().map(|owner| owner as &dyn Subject)
    }

    fn permission(&self) -> Option<Permission<'_>> {
        Some(Permission::Static(self))
    }
}

impl StaticPermission for AbstractResource {
    fn permission(&self, action: &Action) -> AccessLevel {
        self.permissions
            .get(action)
            .copied()
            .unwrap_or(AccessLevel::NOT_SUPPORT)
    }
}

impl fmt::Debug for AbstractResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractResource")
            .field("name", &self.name)
            .field("context", &Resource::context(self))
            .field("owner", &self.owner.as_ref().map(|o| o.name().to_string()))
            .field("permissions", &self.permissions)
            .finish()
    }
}

/// Abstract resources by name.
#[derive(Debug, Default)]
pub struct ResourceCatalog {
    resources: HashMap<String, AbstractResource>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resource called `name`, created empty if it does not exist yet.
    pub fn resource(&mut self, name: &str) -> &mut AbstractResource {
        self.resources
            .entry(name.to_string())
            .or_insert_with(|| AbstractResource::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&AbstractResource> {
        self.resources.get(name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
