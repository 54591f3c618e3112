use std::fmt;
use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::registry::{DuplicatePolicy, RouteRegistry, poison_policy};
use crate::session::SessionRegistry;

/// Opaque deployment-context identifier supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextId(Arc<str>);

impl ContextId {
	/// Creates a context identifier from a host-supplied key.
	pub fn new(id: impl Into<Arc<str>>) -> Self {
		Self(id.into())
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ContextId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Opaque user-session identifier supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Arc<str>);

impl SessionId {
	/// Creates a session identifier from a host-supplied key.
	pub fn new(id: impl Into<Arc<str>>) -> Self {
		Self(id.into())
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SessionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Owner of application registries and session overlays.
///
/// The host keeps one hub per process and passes scope identifiers
/// explicitly; nothing here reads ambient "current session" or "current
/// context" state. Application registries are created once per context
/// and memoized; session overlays are created lazily on first access and
/// dropped when the host reports the session ended.
pub struct RegistryHub {
	policy: DuplicatePolicy,
	applications: RwLock<FxHashMap<ContextId, Arc<RouteRegistry>>>,
	sessions: RwLock<FxHashMap<SessionId, Arc<SessionRegistry>>>,
}

impl RegistryHub {
	/// Creates a hub whose registries use the default overwrite policy.
	pub fn new() -> Self {
		Self::with_policy(DuplicatePolicy::default())
	}

	/// Creates a hub with an explicit duplicate policy for the registries
	/// it creates.
	pub fn with_policy(policy: DuplicatePolicy) -> Self {
		Self {
			policy,
			applications: RwLock::new(FxHashMap::default()),
			sessions: RwLock::new(FxHashMap::default()),
		}
	}

	/// Returns the application registry for `ctx`, creating it on first
	/// access.
	pub fn application(&self, ctx: &ContextId) -> Arc<RouteRegistry> {
		if let Some(registry) = poison_policy!(self.applications, read).get(ctx) {
			return Arc::clone(registry);
		}
		let mut applications = poison_policy!(self.applications, write);
		Arc::clone(applications.entry(ctx.clone()).or_insert_with(|| {
			debug!(context = %ctx, "application registry created");
			Arc::new(RouteRegistry::with_policy("application", self.policy))
		}))
	}

	/// Returns the session overlay for `session` in `ctx`, creating it on
	/// first access.
	pub fn session(&self, ctx: &ContextId, session: &SessionId) -> Arc<SessionRegistry> {
		if let Some(registry) = poison_policy!(self.sessions, read).get(session) {
			return Arc::clone(registry);
		}
		let application = self.application(ctx);
		let mut sessions = poison_policy!(self.sessions, write);
		Arc::clone(sessions.entry(session.clone()).or_insert_with(|| {
			debug!(context = %ctx, session = %session, "session registry created");
			Arc::new(SessionRegistry::new(application))
		}))
	}

	/// Drops the overlay for an ended session. Idempotent; a later
	/// [`session`](Self::session) call starts from an empty overlay.
	pub fn end_session(&self, session: &SessionId) {
		if poison_policy!(self.sessions, write).remove(session).is_some() {
			debug!(session = %session, "session registry dropped");
		}
	}

	/// Drops a context's application registry at undeploy time.
	/// Idempotent. Session overlays already created keep their `Arc`
	/// fallback until individually ended.
	pub fn end_context(&self, ctx: &ContextId) {
		if poison_policy!(self.applications, write).remove(ctx).is_some() {
			debug!(context = %ctx, "application registry dropped");
		}
	}
}

impl Default for RegistryHub {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for RegistryHub {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegistryHub")
			.field("policy", &self.policy)
			.field("contexts", &poison_policy!(self.applications, read).len())
			.field("sessions", &poison_policy!(self.sessions, read).len())
			.finish()
	}
}
