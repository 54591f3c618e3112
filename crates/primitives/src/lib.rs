//! Route path and navigation target primitives.
//!
//! This crate provides the foundational types for the routing system:
//! - [`RoutePath`]: Normalized, validated route path
//! - [`RouteFormatError`]: Rejection reasons for malformed paths
//! - [`TargetDef`]: Navigation target definition
//! - [`LayoutDef`]: Parent layout definition
//! - [`ParameterMode`]: Trailing-segment tolerance of a target
//!
//! Definitions are declared as `static` values, typically through the
//! [`target!`] and [`layout!`] macros; the identity of a definition is its
//! `&'static` reference.

mod macros;
mod path;
mod target;

pub use path::{RouteFormatError, RoutePath};
pub use target::{
	LayoutDef, LayoutEntry, LayoutMeta, ParameterMode, TargetDef, TargetEntry, TargetMeta,
};
