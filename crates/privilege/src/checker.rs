//! Decision engine.

use crate::{
    AccessLevel, Action, Context, Delegatee, Error, Privilege, Registry, Relation, Resource,
    Result, Subject,
};
use tracing::{debug, warn};

/// Name reported for requests made without a subject.
pub const ANONYMOUS: &str = "anonymous";

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The resolved privilege is below the required access level.
    Insufficient {
        privilege: Privilege,
        required: AccessLevel,
    },
    /// The attached delegatee vetoed the request.
    Vetoed,
}

/// An ordinary negative decision.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{subject} does not have the permission to {action} {resource}")]
pub struct Denied {
    pub subject: String,
    pub action: Action,
    pub resource: String,
    pub reason: DenyReason,
}

/// Result of a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denied),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Turn a denial into an error, for callers that want to use `?`.
    pub fn into_result(self) -> std::result::Result<(), Denied> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(denied) => Err(denied),
        }
    }
}

/// Decides whether a subject may perform an action on a resource.
///
/// A checker is built for a single decision and consumed by
/// [`Checker::decide`].
///
/// ```
/// use privilege::{
///     AccessLevel, Action, Checker, Context, Permission, Registry, Relation, Resource,
///     StaticPermission, Subject,
/// };
///
/// struct User(&'static str);
///
/// impl Subject for User {
///     fn name(&self) -> &str {
///         self.0
///     }
///
///     fn relation(&self, _ctx: Context<'_>, other: Option<&dyn Subject>) -> Relation {
///         match other {
///             Some(owner) if owner.name() == self.0 => "self".into(),
///             _ => "anyone".into(),
///         }
///     }
/// }
///
/// struct Avatar {
///     owner: User,
/// }
///
/// impl Resource for Avatar {
///     fn name(&self) -> &str {
///         "avatar"
///     }
///
///     fn owner(&self) -> Option<&dyn Subject> {
///         Some(&self.owner)
///     }
///
///     fn permission(&self) -> Option<Permission<'_>> {
///         Some(Permission::Static(self))
///     }
/// }
///
/// impl StaticPermission for Avatar {
///     fn permission(&self, action: &Action) -> AccessLevel {
///         match action.to_string().as_str() {
///             "read" => AccessLevel::PUBLIC,
///             "update" => AccessLevel::TOP_SECRET,
///             _ => AccessLevel::NOT_SUPPORT,
///         }
///     }
/// }
///
/// let registry = Registry::new();
/// let avatar = Avatar { owner: User("alice") };
///
/// let decision = Checker::new(&registry, &User("alice"))
///     .perform(["update"])
///     .decide(&avatar)?;
/// assert!(decision.is_allowed());
///
/// let decision = Checker::new(&registry, &User("bob"))
///     .perform(["update"])
///     .decide(&avatar)?;
/// assert!(!decision.is_allowed());
/// # Ok::<(), privilege::Error>(())
/// ```
pub struct Checker<'a> {
    registry: &'a Registry,
    subject: Option<&'a dyn Subject>,
    action: Result<Action>,
    delegatee: Option<&'a dyn Delegatee>,
}

impl<'a> Checker<'a> {
    pub fn new(registry: &'a Registry, subject: &'a dyn Subject) -> Self {
        Self {
            registry,
            subject: Some(subject),
            action: Ok(Action::default()),
            delegatee: None,
        }
    }

    /// A checker for a request made without a subject.
    ///
    /// Anonymous requests hold [`Privilege::ANYONE`].
    pub fn anonymous(registry: &'a Registry) -> Self {
        Self {
            registry,
            subject: None,
            action: Ok(Action::default()),
            delegatee: None,
        }
    }

    /// Set the action path. An invalid path is reported by [`Checker::decide`].
    pub fn perform<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action = Action::new(segments);
        self
    }

    pub fn perform_action(mut self, action: Action) -> Self {
        self.action = Ok(action);
        self
    }

    /// Attach a delegatee that can veto the decision.
    pub fn delegate(mut self, delegatee: &'a dyn Delegatee) -> Self {
        self.delegatee = Some(delegatee);
        self
    }

    /// Decide whether the request is allowed on `resource`.
    ///
    /// Returns `Err` only when the wiring is broken: the resource exposes no
    /// permission shape, its owner is also its context, the action path is
    /// invalid, or the relation cannot be resolved.
    pub fn decide(self, resource: &dyn Resource) -> Result<Decision> {
        let action = self.action?;

        let Some(permission) = resource.permission() else {
            warn!(resource = resource.name(), "resource has no permission shape");
            return Err(Error::Configuration(format!(
                "resource {} implements neither static nor dynamic permission",
                resource.name()
            )));
        };
        let required = permission.required(self.subject, &action);

        let context = resource.context();
        let owner = resource.owner();
        if let Some(owner) = owner {
            if context.scope().is_some() && context == Context::from(&owner.name()) {
                warn!(resource = resource.name(), "owner is used as the context");
                return Err(Error::Configuration(format!(
                    "resource {} uses its owner as its context, use the global context instead",
                    resource.name()
                )));
            }
        }

        let (relation, privilege) = match self.subject {
            None => (Relation::anyone(), Privilege::ANYONE),
            Some(subject) => {
                let relation = subject.relation(context, owner);
                let privilege = self.registry.resolve(context, &relation)?;
                (relation, privilege)
            }
        };

        let subject = self.subject.map_or(ANONYMOUS, |s| s.name());
        let deny = |reason| {
            Decision::Deny(Denied {
                subject: subject.to_string(),
                action: action.clone(),
                resource: resource.name().to_string(),
                reason,
            })
        };

        if let Some(delegatee) = self.delegatee {
            if !delegatee.evaluate(&relation, resource, &action) {
                debug!(
                    subject,
                    %action,
                    resource = resource.name(),
                    %relation,
                    "vetoed by delegatee"
                );
                return Ok(deny(DenyReason::Vetoed));
            }
        }

        let allowed = privilege.satisfies(required);
        debug!(
            subject,
            %action,
            resource = resource.name(),
            %relation,
            %privilege,
            %required,
            allowed,
            "decision"
        );

        if allowed {
            Ok(Decision::Allow)
        } else {
            Ok(deny(DenyReason::Insufficient {
                privilege,
                required,
            }))
        }
    }
}
