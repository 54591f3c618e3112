//! Scoped route registries.
//!
//! A [`RouteRegistry`] maps normalized paths to navigation target
//! definitions, each optionally wrapped in an ordered parent layout chain.
//! Two registry scopes exist in a hierarchy: an application-wide registry
//! per deployment context, and a per-session overlay that overrides or
//! extends it for the lifetime of one user session
//! ([`SessionRegistry`]). The [`RegistryHub`] owns both kinds, keyed by
//! host-supplied [`ContextId`] / [`SessionId`] values; there is no
//! ambient "current session" state anywhere in this crate.
//!
//! Registration is declarative ([`RouteSpec`]: path, target, aliases,
//! layout chain) or imperative ([`RouteRegistry::set_route`]). Lookup
//! misses are `None`, removals are idempotent no-ops, and every operation
//! on one registry is atomic at call granularity.

mod error;
mod hub;
mod registry;
mod session;
mod spec;

pub use error::RegistryError;
pub use hub::{ContextId, RegistryHub, SessionId};
pub use registry::{DuplicatePolicy, RouteEntry, RouteRegistry};
pub use session::SessionRegistry;
pub use spec::RouteSpec;

pub use waypost_primitives::{
	LayoutDef, LayoutEntry, LayoutMeta, ParameterMode, RouteFormatError, RoutePath, TargetDef,
	TargetEntry, TargetMeta,
};
