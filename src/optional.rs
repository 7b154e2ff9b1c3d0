/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Optional`] itself, its constructors, predicates and conversions.
//!
//! Transformations live in [`transform`] and ways to get the value out in [`extract`]

pub mod extract;
pub mod transform;

use std::fmt::{self, Display};

/// Either exactly one value or nothing at all
///
/// An [`Optional`] never changes its variant after it's been created.
/// Every operation that looks like a transition actually consumes the old [`Optional`] and returns a new one.
///
/// Use [`Optional::from_unsafe()`] to wrap values that may be missing
/// and [`Optional::Present`] for the ones that are known to be there.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Optional<T> {
	/// There is no value
	Absent,

	/// There is a value
	Present(T),
}

impl<T> Optional<T> {
	/// Wraps `value` unconditionally
	#[must_use]
	pub const fn some(value: T) -> Self {
		Self::Present(value)
	}

	/// Returns the [`Absent`](`Optional::Absent`) variant
	#[must_use]
	pub const fn none() -> Self {
		Self::Absent
	}

	/// Returns `true` if there is a value
	#[must_use]
	pub const fn is_some(&self) -> bool {
		matches!(self, Self::Present(_))
	}

	/// Returns `true` if there is no value.
	///
	/// Always the opposite of [`is_some()`](`Optional::is_some`)
	#[must_use]
	pub const fn is_none(&self) -> bool {
		!self.is_some()
	}

	/// Returns `true` if there is a value and it matches the predicate
	#[must_use]
	pub fn is_some_and(self, pred: impl FnOnce(T) -> bool) -> bool {
		match self {
			Self::Present(value) => pred(value),
			Self::Absent => false,
		}
	}

	/// Borrows the value, if there is one
	#[must_use]
	pub const fn as_ref(&self) -> Optional<&T> {
		match self {
			Self::Present(value) => Optional::Present(value),
			Self::Absent => Optional::Absent,
		}
	}

	/// Converts into a std [`Option`]
	#[must_use]
	pub fn into_option(self) -> Option<T> {
		match self {
			Self::Present(value) => Some(value),
			Self::Absent => None,
		}
	}

	/// Returns an iterator over the value, if there is one
	pub fn iter(&self) -> std::option::IntoIter<&T> {
		self.as_ref().into_iter()
	}
}

impl<T> Default for Optional<T> {
	fn default() -> Self {
		Self::Absent
	}
}

impl<T> From<Option<T>> for Optional<T> {
	fn from(opt: Option<T>) -> Self {
		match opt {
			Some(value) => Self::Present(value),
			None => Self::Absent,
		}
	}
}

impl<T> From<Optional<T>> for Option<T> {
	fn from(opt: Optional<T>) -> Self {
		opt.into_option()
	}
}

impl<T> IntoIterator for Optional<T> {
	type Item = T;
	type IntoIter = std::option::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.into_option().into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Optional<T> {
	type Item = &'a T;
	type IntoIter = std::option::IntoIter<&'a T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Renders as `Some(<value>)` or `None`. Meant for diagnostics, not for parsing
impl<T: Display> Display for Optional<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Present(value) => write!(f, "Some({value})"),
			Self::Absent => f.write_str("None"),
		}
	}
}
