use std::sync::RwLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use waypost_primitives::{LayoutDef, RoutePath, TargetDef, TargetEntry};

use crate::error::RegistryError;
use crate::spec::RouteSpec;

/// Policy for handling registration at an occupied path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Replace the existing entry silently (last registration wins).
	#[default]
	Overwrite,
	/// Refuse to displace a different target with
	/// [`RegistryError::AmbiguousRoute`]. Re-binding the same target at
	/// its own path is never a conflict.
	Reject,
}

/// One resolved route binding.
#[derive(Debug, Clone)]
pub struct RouteEntry {
	/// The bound path.
	pub path: RoutePath,
	/// The navigation target registered at the path.
	pub target: &'static TargetDef,
	/// Parent layout chain, innermost wrapper first.
	pub layouts: Vec<&'static LayoutDef>,
}

/// Stored per-path state. The layout chain lives inside the entry and is
/// removed atomically with it.
#[derive(Clone)]
struct StoredRoute {
	target: &'static TargetDef,
	layouts: Vec<&'static LayoutDef>,
}

macro_rules! poison_policy {
	($lock:expr, $method:ident) => {
		if cfg!(any(test, debug_assertions)) {
			$lock.$method().unwrap_or_else(|e| e.into_inner())
		} else {
			$lock.$method().expect("registry lock poisoned")
		}
	};
}
pub(crate) use poison_policy;

/// Route registry for one scope.
///
/// Holds one scope's path-to-target mapping behind a single lock: every
/// mutation and lookup is atomic with respect to the others, and a reader
/// observes either the pre- or post-state of a mutation, never an
/// intermediate state.
pub struct RouteRegistry {
	label: &'static str,
	policy: DuplicatePolicy,
	routes: RwLock<FxHashMap<RoutePath, StoredRoute>>,
}

impl RouteRegistry {
	/// Creates an empty registry with the default overwrite policy.
	pub fn new(label: &'static str) -> Self {
		Self::with_policy(label, DuplicatePolicy::default())
	}

	/// Creates an empty registry with an explicit duplicate policy.
	pub fn with_policy(label: &'static str, policy: DuplicatePolicy) -> Self {
		Self {
			label,
			policy,
			routes: RwLock::new(FxHashMap::default()),
		}
	}

	/// Returns the diagnostic label for this registry.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the duplicate policy.
	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Registers `target` at `path` with the given parent layout chain.
	///
	/// Overwrites any existing entry at `path` under
	/// [`DuplicatePolicy::Overwrite`]; under
	/// [`DuplicatePolicy::Reject`] a different occupant fails the call
	/// and the map is unchanged.
	pub fn set_route(
		&self,
		path: RoutePath,
		target: &'static TargetDef,
		layouts: Vec<&'static LayoutDef>,
	) -> Result<(), RegistryError> {
		let mut routes = poison_policy!(self.routes, write);
		self.check_occupant(&routes, &path, target)?;
		debug!(registry = self.label, path = %path, target = target.id(), "route set");
		routes.insert(path, StoredRoute { target, layouts });
		Ok(())
	}

	/// Applies a route spec: the primary path plus every alias, bound to
	/// the same target and layout chain in one critical section.
	///
	/// All paths are checked against the duplicate policy before any
	/// entry is written, so a rejected spec registers nothing.
	pub fn register(&self, spec: &RouteSpec) -> Result<(), RegistryError> {
		let mut routes = poison_policy!(self.routes, write);
		for path in spec.paths() {
			self.check_occupant(&routes, path, spec.target)?;
		}
		for path in spec.paths() {
			debug!(registry = self.label, path = %path, target = spec.target.id(), "route set");
			routes.insert(
				path.clone(),
				StoredRoute {
					target: spec.target,
					layouts: spec.layouts.clone(),
				},
			);
		}
		Ok(())
	}

	fn check_occupant(
		&self,
		routes: &FxHashMap<RoutePath, StoredRoute>,
		path: &RoutePath,
		target: &'static TargetDef,
	) -> Result<(), RegistryError> {
		if self.policy == DuplicatePolicy::Reject
			&& let Some(existing) = routes.get(path)
			&& !std::ptr::eq(existing.target, target)
		{
			return Err(RegistryError::AmbiguousRoute {
				path: path.clone(),
				existing: existing.target.id(),
				incoming: target.id(),
			});
		}
		Ok(())
	}

	/// Removes whatever entry exists at `path`. No-op when absent.
	pub fn remove_path(&self, path: &RoutePath) {
		let mut routes = poison_policy!(self.routes, write);
		if routes.remove(path).is_some() {
			debug!(registry = self.label, path = %path, "route removed");
		}
	}

	/// Removes every entry, across all paths, bound to `target`. No-op
	/// when none.
	pub fn remove_target(&self, target: &'static TargetDef) {
		let mut routes = poison_policy!(self.routes, write);
		routes.retain(|path, stored| {
			let keep = !std::ptr::eq(stored.target, target);
			if !keep {
				debug!(registry = self.label, path = %path, target = target.id(), "route removed");
			}
			keep
		});
	}

	/// Removes the entry at `path` only if it is currently bound to
	/// `target`; an entry belonging to a different target is untouched.
	pub fn remove_binding(&self, path: &RoutePath, target: &'static TargetDef) {
		let mut routes = poison_policy!(self.routes, write);
		if let Some(stored) = routes.get(path)
			&& std::ptr::eq(stored.target, target)
		{
			routes.remove(path);
			debug!(registry = self.label, path = %path, target = target.id(), "route removed");
		}
	}

	/// Looks up the target registered at an exact path.
	pub fn navigation_target(&self, path: &RoutePath) -> Option<&'static TargetDef> {
		poison_policy!(self.routes, read)
			.get(path)
			.map(|stored| stored.target)
	}

	/// Looks up a target for `path` plus trailing `segments`.
	///
	/// The exact path formed by appending `segments` takes precedence;
	/// failing that, the entry at `path` itself matches when its target's
	/// [`ParameterMode`](waypost_primitives::ParameterMode) accepts the
	/// segment count.
	pub fn navigation_target_with(
		&self,
		path: &RoutePath,
		segments: &[&str],
	) -> Option<&'static TargetDef> {
		let routes = poison_policy!(self.routes, read);
		if let Ok(full) = path.join(segments)
			&& let Some(stored) = routes.get(&full)
		{
			return Some(stored.target);
		}
		let stored = routes.get(path)?;
		stored
			.target
			.parameters()
			.accepts(segments.len())
			.then_some(stored.target)
	}

	/// Returns the full entry at an exact path, including its layout
	/// chain.
	pub fn resolve(&self, path: &RoutePath) -> Option<RouteEntry> {
		poison_policy!(self.routes, read)
			.get(path)
			.map(|stored| RouteEntry {
				path: path.clone(),
				target: stored.target,
				layouts: stored.layouts.clone(),
			})
	}

	/// Returns every path currently bound to `target`, sorted.
	pub fn paths_for(&self, target: &'static TargetDef) -> Vec<RoutePath> {
		let routes = poison_policy!(self.routes, read);
		let mut paths: Vec<_> = routes
			.iter()
			.filter(|(_, stored)| std::ptr::eq(stored.target, target))
			.map(|(path, _)| path.clone())
			.collect();
		paths.sort();
		paths
	}

	/// Returns a snapshot of all entries, sorted by path.
	pub fn routes(&self) -> Vec<RouteEntry> {
		let routes = poison_policy!(self.routes, read);
		let mut entries: Vec<_> = routes
			.iter()
			.map(|(path, stored)| RouteEntry {
				path: path.clone(),
				target: stored.target,
				layouts: stored.layouts.clone(),
			})
			.collect();
		entries.sort_by(|a, b| a.path.cmp(&b.path));
		entries
	}

	/// Returns the number of registered paths.
	pub fn len(&self) -> usize {
		poison_policy!(self.routes, read).len()
	}

	/// Returns true if no path is registered.
	pub fn is_empty(&self) -> bool {
		poison_policy!(self.routes, read).is_empty()
	}
}

impl std::fmt::Debug for RouteRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteRegistry")
			.field("label", &self.label)
			.field("policy", &self.policy)
			.field("len", &self.len())
			.finish()
	}
}
