/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Operations that turn one [`Optional`] into another
//!
//! None of them invoke their callback on an [`Absent`](`Optional::Absent`) value.
//! Callbacks are never guarded: a panic unwinds through, an error is returned as is.

use tap::Pipe;

use super::Optional;
use crate::Nullable;

impl<T> Optional<T> {
	/// Transforms the value with `f`, if there is one.
	///
	/// The result of `f` is trusted to be a value and is never checked for a missing marker.
	/// A callback that returns an [`Option`] ends up as `Present(None)` here,
	/// use [`map_nullable()`](`Optional::map_nullable`) to collapse it into [`Absent`](`Optional::Absent`) instead.
	#[must_use]
	pub fn map<K, F>(self, f: F) -> Optional<K>
	where
		F: FnOnce(T) -> K,
	{
		match self {
			Self::Present(value) => Optional::Present(f(value)),
			Self::Absent => Optional::Absent,
		}
	}

	/// Transforms the value with `f` that may return a missing value, if there is one.
	///
	/// The result of `f` goes through [`Optional::from_unsafe()`],
	/// so a missing result collapses into [`Absent`](`Optional::Absent`) instead of a nested optional.
	///
	/// # Example
	///
	/// ```
	/// use optional::Optional;
	///
	/// let first_char = Optional::Present("").map_nullable(|s| s.chars().next());
	/// assert_eq!(first_char, Optional::Absent);
	/// ```
	#[must_use]
	pub fn map_nullable<R, F>(self, f: F) -> Optional<R::Value>
	where
		F: FnOnce(T) -> R,
		R: Nullable,
	{
		match self {
			Self::Present(value) => f(value).pipe(Optional::from_unsafe),
			Self::Absent => Optional::Absent,
		}
	}

	/// Chains `f` that already returns an [`Optional`], if there is a value.
	///
	/// The result of `f` is returned as is.
	#[must_use]
	pub fn flat_map<K, F>(self, f: F) -> Optional<K>
	where
		F: FnOnce(T) -> Optional<K>,
	{
		match self {
			Self::Present(value) => f(value),
			Self::Absent => Optional::Absent,
		}
	}

	/// Alias for [`flat_map()`](`Optional::flat_map`)
	#[must_use]
	pub fn and_then<K, F>(self, f: F) -> Optional<K>
	where
		F: FnOnce(T) -> Optional<K>,
	{
		self.flat_map(f)
	}

	/// Returns `other` if there is a value and [`Absent`](`Optional::Absent`) otherwise.
	///
	/// The value itself is dropped, it's replaced rather than merged.
	#[must_use]
	pub fn and<K>(self, other: Optional<K>) -> Optional<K> {
		match self {
			Self::Present(_) => other,
			Self::Absent => Optional::Absent,
		}
	}

	/// Keeps the value only if it matches `pred`
	#[must_use]
	pub fn filter<P>(self, pred: P) -> Self
	where
		P: FnOnce(&T) -> bool,
	{
		match self {
			Self::Present(value) => {
				if pred(&value) {
					Self::Present(value)
				} else {
					Self::Absent
				}
			}
			Self::Absent => Self::Absent,
		}
	}

	/// Calls `f` with a reference to the value, if there is one, and passes `self` through
	#[must_use]
	pub fn inspect<F>(self, f: F) -> Self
	where
		F: FnOnce(&T),
	{
		if let Self::Present(value) = &self {
			f(value);
		}

		self
	}

	/// [`Optional::map()`] alternative that can return a result
	///
	/// # Errors
	/// Returns the error of `f` unchanged
	pub fn try_map<K, E, F>(self, f: F) -> Result<Optional<K>, E>
	where
		F: FnOnce(T) -> Result<K, E>,
	{
		match self {
			Self::Present(value) => f(value).map(Optional::Present),
			Self::Absent => Ok(Optional::Absent),
		}
	}

	/// [`Optional::flat_map()`] alternative that can return a result
	///
	/// # Errors
	/// Returns the error of `f` unchanged
	pub fn try_and_then<K, E, F>(self, f: F) -> Result<Optional<K>, E>
	where
		F: FnOnce(T) -> Result<Optional<K>, E>,
	{
		match self {
			Self::Present(value) => f(value),
			Self::Absent => Ok(Optional::Absent),
		}
	}
}

impl<T> Optional<Optional<T>> {
	/// Removes one level of nesting
	#[must_use]
	pub fn flatten(self) -> Optional<T> {
		self.flat_map(|inner| inner)
	}
}
