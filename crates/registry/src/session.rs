use std::sync::Arc;

use waypost_primitives::{LayoutDef, RoutePath, TargetDef};

use crate::error::RegistryError;
use crate::registry::{RouteEntry, RouteRegistry};
use crate::spec::RouteSpec;

/// Session-scoped registry layered over an application registry.
///
/// Mutations touch only the session scope. Lookups consult the session
/// scope first and fall back to the application registry on a miss, so a
/// session can override an application route for its own lifetime without
/// affecting other sessions. Removing a path here only uncovers the
/// application entry underneath, it never deletes it.
///
/// The overlay inherits the application registry's duplicate policy.
pub struct SessionRegistry {
	scope: RouteRegistry,
	application: Arc<RouteRegistry>,
}

impl SessionRegistry {
	/// Creates an empty session overlay over `application`.
	pub fn new(application: Arc<RouteRegistry>) -> Self {
		Self {
			scope: RouteRegistry::with_policy("session", application.policy()),
			application,
		}
	}

	/// Registers a session-scoped route.
	pub fn set_route(
		&self,
		path: RoutePath,
		target: &'static TargetDef,
		layouts: Vec<&'static LayoutDef>,
	) -> Result<(), RegistryError> {
		self.scope.set_route(path, target, layouts)
	}

	/// Applies a route spec to the session scope.
	pub fn register(&self, spec: &RouteSpec) -> Result<(), RegistryError> {
		self.scope.register(spec)
	}

	/// Removes the session-scoped entry at `path`, if any.
	pub fn remove_path(&self, path: &RoutePath) {
		self.scope.remove_path(path);
	}

	/// Removes every session-scoped entry bound to `target`.
	pub fn remove_target(&self, target: &'static TargetDef) {
		self.scope.remove_target(target);
	}

	/// Removes the session-scoped entry at `path` only if bound to
	/// `target`.
	pub fn remove_binding(&self, path: &RoutePath, target: &'static TargetDef) {
		self.scope.remove_binding(path, target);
	}

	/// Resolves a target for an exact path, session scope first.
	pub fn navigation_target(&self, path: &RoutePath) -> Option<&'static TargetDef> {
		self.scope
			.navigation_target(path)
			.or_else(|| self.application.navigation_target(path))
	}

	/// Resolves a target for `path` plus trailing `segments`, session
	/// scope first.
	pub fn navigation_target_with(
		&self,
		path: &RoutePath,
		segments: &[&str],
	) -> Option<&'static TargetDef> {
		self.scope
			.navigation_target_with(path, segments)
			.or_else(|| self.application.navigation_target_with(path, segments))
	}

	/// Resolves the full entry at an exact path, session scope first.
	pub fn resolve(&self, path: &RoutePath) -> Option<RouteEntry> {
		self.scope
			.resolve(path)
			.or_else(|| self.application.resolve(path))
	}

	/// Returns the session-scoped registry.
	pub fn session_scope(&self) -> &RouteRegistry {
		&self.scope
	}

	/// Returns the application registry this session falls back to.
	pub fn application(&self) -> &Arc<RouteRegistry> {
		&self.application
	}
}

impl std::fmt::Debug for SessionRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionRegistry")
			.field("scope", &self.scope)
			.field("application", &self.application.label())
			.finish()
	}
}
