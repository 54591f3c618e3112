use thiserror::Error;

use waypost_primitives::{RouteFormatError, RoutePath};

/// Errors raised by route registration.
///
/// Lookups never produce errors; a miss is `None`. Removals are
/// idempotent no-ops. The only fallible operations are the registering
/// ones, which validate their paths and, under
/// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject), refuse to
/// displace a different target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// The supplied path was not a valid route path.
	#[error(transparent)]
	Format(#[from] RouteFormatError),
	/// A different target already occupies the path.
	#[error("ambiguous route at {path:?}: {existing} is registered, rejected {incoming}")]
	AmbiguousRoute {
		/// The contested path.
		path: RoutePath,
		/// ID of the target currently registered at the path.
		existing: &'static str,
		/// ID of the target whose registration was rejected.
		incoming: &'static str,
	},
}
