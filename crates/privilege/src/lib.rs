//! Relation-based authorization decisions.
//!
//! This crate decides whether a subject may perform an action on a resource
//! by comparing two ordinals: the [`Privilege`] the subject holds over the
//! resource's owner, and the [`AccessLevel`] the resource demands for the
//! action. A [`Token`] can narrow a decision further, never widen it.
//!
//! # Core Concepts
//!
//! ## Relations and the Registry
//!
//! A [`Subject`] describes how it relates to another subject within a
//! [`Context`] with a [`Relation`] label, such as `"self"` or `"friend"`. The
//! [`Registry`] resolves labels to privileges. Named contexts carry their own
//! vocabulary and fall back to a default one shared by all contexts.
//!
//! ## Resources
//!
//! A [`Resource`] exposes its owner, its context, and one of two
//! [`Permission`] shapes computing the required access level, either from the
//! action alone or from the action and the requesting subject.
//!
//! ## Checker
//!
//! A [`Checker`] runs one decision:
//!
//! 1. Ask the resource for the required access level.
//! 2. Reject resources whose owner is also their context.
//! 3. Resolve the subject's relation to a privilege (anonymous requests hold
//!    [`Privilege::ANYONE`]).
//! 4. Let the attached [`Delegatee`], if any, veto the request.
//! 5. Allow if the privilege satisfies the access level.
//!
//! An ordinary denial is a [`Decision::Deny`]. Errors are reserved for broken
//! wiring: see [`Error`].
//!
//! ## Tokens
//!
//! A [`Token`] is a least-privilege rule table. It denies everything unless a
//! rule allows the request, and any matching ban wins over every allow.
//!
//! # Example
//!
//! ```
//! use privilege::{AbstractResource, Checker, Context, Registry, Relation, Subject, Token};
//! use privilege::{AccessLevel, Privilege};
//!
//! struct Member;
//!
//! impl Subject for Member {
//!     fn name(&self) -> &str {
//!         "member"
//!     }
//!
//!     fn relation(&self, _ctx: Context<'_>, _owner: Option<&dyn Subject>) -> Relation {
//!         "member".into()
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(&"forum", "member", Privilege::LOW_FAMILIAR);
//!
//! let mut board = AbstractResource::new("board");
//! board
//!     .set_context("forum")
//!     .set_permission(AccessLevel::LOW_PRIVATE, "read".parse()?)
//!     .set_permission(AccessLevel::LOW_PRIVATE, "post".parse()?);
//!
//! let decision = Checker::new(&registry, &Member).perform(["post"]).decide(&board)?;
//! assert!(decision.is_allowed());
//!
//! // A token that may only read.
//! let mut token = Token::new();
//! token.allow_action_in_scope("board", "read".parse()?);
//!
//! let decision = Checker::new(&registry, &Member)
//!     .perform(["post"])
//!     .delegate(&token)
//!     .decide(&board)?;
//! assert!(!decision.is_allowed());
//! # Ok::<(), privilege::Error>(())
//! ```

mod abstract_resource;
mod action;
mod capability;
mod checker;
mod config;
mod context;
mod error;
mod level;
mod registry;
mod relation;
mod token;

pub use abstract_resource::{AbstractResource, ResourceCatalog};
pub use action::Action;
pub use capability::{Delegatee, DynamicPermission, Permission, Resource, StaticPermission, Subject};
pub use checker::{ANONYMOUS, Checker, Decision, Denied, DenyReason};
pub use config::RegistryConfig;
pub use context::{Context, Scope};
pub use error::{Error, Result};
pub use level::{AccessLevel, Privilege};
pub use registry::Registry;
pub use relation::Relation;
pub use token::{RuleKey, Token};
