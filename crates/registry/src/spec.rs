use waypost_primitives::{LayoutDef, RoutePath, TargetDef};

/// Declarative route bundle: a primary path, its target, alias paths, and
/// the parent layout chain.
///
/// The plain-data analog of annotation-driven route declarations. Applied
/// in one atomic step by
/// [`RouteRegistry::register`](crate::RouteRegistry::register): either
/// every path in the spec is bound, or none is.
#[derive(Debug, Clone)]
pub struct RouteSpec {
	pub(crate) path: RoutePath,
	pub(crate) target: &'static TargetDef,
	pub(crate) aliases: Vec<RoutePath>,
	pub(crate) layouts: Vec<&'static LayoutDef>,
}

impl RouteSpec {
	/// Creates a spec binding `target` at `path`, with no aliases and no
	/// parent layouts.
	pub fn new(path: RoutePath, target: &'static TargetDef) -> Self {
		Self {
			path,
			target,
			aliases: Vec::new(),
			layouts: Vec::new(),
		}
	}

	/// Adds an alias path resolving to the same target.
	pub fn alias(mut self, path: RoutePath) -> Self {
		self.aliases.push(path);
		self
	}

	/// Appends a parent layout to the chain, innermost wrapper first.
	pub fn layout(mut self, layout: &'static LayoutDef) -> Self {
		self.layouts.push(layout);
		self
	}

	/// Returns the primary path.
	pub fn path(&self) -> &RoutePath {
		&self.path
	}

	/// Returns the navigation target.
	pub fn target(&self) -> &'static TargetDef {
		self.target
	}

	/// Returns the alias paths.
	pub fn aliases(&self) -> &[RoutePath] {
		&self.aliases
	}

	/// Returns the parent layout chain, innermost wrapper first.
	pub fn layouts(&self) -> &[&'static LayoutDef] {
		&self.layouts
	}

	/// Returns every path this spec claims: the primary path, then aliases.
	pub(crate) fn paths(&self) -> impl Iterator<Item = &RoutePath> {
		std::iter::once(&self.path).chain(self.aliases.iter())
	}
}
