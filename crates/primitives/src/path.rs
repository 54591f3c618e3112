use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rejection reasons for malformed route paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteFormatError {
	/// The path contained an interior empty segment (`"a//b"`).
	#[error("empty segment in route path")]
	EmptySegment,
	/// A segment contained a character that cannot appear in a route.
	#[error("illegal character {ch:?} in segment {segment:?}")]
	IllegalCharacter {
		/// The offending segment.
		segment: String,
		/// The first character that failed validation.
		ch: char,
	},
	/// `.` and `..` are reserved and cannot be route segments.
	#[error("reserved segment {segment:?}")]
	ReservedSegment {
		/// The offending segment.
		segment: String,
	},
}

/// Normalized route path.
///
/// A path is an ordered list of segments; the empty list is the root path
/// and displays as `""`. Parsing tolerates leading and trailing slashes
/// (`"/home/"` normalizes to `"home"`) and rejects interior empty
/// segments, reserved segments, and segments containing whitespace,
/// control characters, `?`, or `#`.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath {
	segments: Vec<String>,
}

impl RoutePath {
	/// Returns the root path.
	pub fn root() -> Self {
		Self::default()
	}

	/// Parses and normalizes a path string.
	pub fn parse(input: &str) -> Result<Self, RouteFormatError> {
		let trimmed = input.trim_matches('/');
		if trimmed.is_empty() {
			return Ok(Self::root());
		}
		let segments = trimmed
			.split('/')
			.map(check_segment)
			.collect::<Result<_, _>>()?;
		Ok(Self { segments })
	}

	/// Returns the path segments.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Returns true for the root path.
	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	/// Returns a new path with `extra` trailing segments appended.
	///
	/// Each appended segment is validated with the same rules as
	/// [`RoutePath::parse`].
	pub fn join(&self, extra: &[&str]) -> Result<Self, RouteFormatError> {
		let mut segments = self.segments.clone();
		for segment in extra {
			segments.push(check_segment(segment)?);
		}
		Ok(Self { segments })
	}
}

fn check_segment(segment: &str) -> Result<String, RouteFormatError> {
	if segment.is_empty() {
		return Err(RouteFormatError::EmptySegment);
	}
	if segment == "." || segment == ".." {
		return Err(RouteFormatError::ReservedSegment {
			segment: segment.to_owned(),
		});
	}
	if let Some(ch) = segment
		.chars()
		.find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#'))
	{
		return Err(RouteFormatError::IllegalCharacter {
			segment: segment.to_owned(),
			ch,
		});
	}
	Ok(segment.to_owned())
}

impl fmt::Display for RoutePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.segments.join("/"))
	}
}

impl fmt::Debug for RoutePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.to_string())
	}
}

impl FromStr for RoutePath {
	type Err = RouteFormatError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
