/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`Nullable`] trait, the bridge from raw maybe-missing values into [`Optional`]

use crate::Optional;

/// A raw value that may hold a "missing" marker instead of an actual value
///
/// [`Optional::from_unsafe()`] accepts any [`Nullable`] and this trait's impls are
/// the only place in the crate that decide whether a value is missing.
/// Everything that's already an [`Optional`] is trusted as is.
pub trait Nullable {
	/// Type of the value when it's there
	type Value;

	/// Checks for the missing marker and wraps the value if there isn't one
	fn into_optional(self) -> Optional<Self::Value>;
}

impl<T> Nullable for Option<T> {
	type Value = T;

	fn into_optional(self) -> Optional<T> {
		match self {
			Some(value) => Optional::Present(value),
			None => Optional::Absent,
		}
	}
}

impl<'a, T> Nullable for &'a Option<T> {
	type Value = &'a T;

	fn into_optional(self) -> Optional<&'a T> {
		self.as_ref().into_optional()
	}
}

impl<T> Nullable for Optional<T> {
	type Value = T;

	fn into_optional(self) -> Optional<T> {
		self
	}
}

impl<T> Optional<T> {
	/// Wraps a raw value that may be missing.
	///
	/// Returns [`Absent`](`Optional::Absent`) if `raw` holds the missing marker
	/// and [`Present`](`Optional::Present`) otherwise.
	///
	/// # Example
	///
	/// ```
	/// use optional::Optional;
	///
	/// assert_eq!(Optional::from_unsafe(Some(5)), Optional::Present(5));
	/// assert_eq!(Optional::<i32>::from_unsafe(None), Optional::Absent);
	/// ```
	#[must_use]
	pub fn from_unsafe<R>(raw: R) -> Self
	where
		R: Nullable<Value = T>,
	{
		raw.into_optional()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn present_raw_value() {
		let opt = Optional::from_unsafe(Some("hello"));
		assert!(opt.is_some(), "a non-missing value should be present");
		assert_eq!(opt.unwrap(), "hello");
	}

	#[test]
	fn missing_raw_value() {
		let opt = Optional::<&str>::from_unsafe(None);
		assert!(!opt.is_some(), "a missing value should be absent");
	}

	#[test]
	fn borrowed_raw_value() {
		let raw = Some(String::from("borrowed"));
		let opt = Optional::from_unsafe(&raw);

		assert_eq!(opt, Optional::Present(&String::from("borrowed")));
		assert_eq!(
			Optional::from_unsafe(&None::<String>),
			Optional::<&String>::Absent
		);
	}

	#[test]
	fn optional_is_trusted_as_is() {
		assert_eq!(
			Optional::from_unsafe(Optional::Present(3)),
			Optional::Present(3)
		);
		assert_eq!(
			Optional::from_unsafe(Optional::<i32>::Absent),
			Optional::Absent
		);
	}

	#[test]
	fn nested_missing_marker_is_not_unwrapped() {
		// only the outer layer is checked
		let opt = Optional::from_unsafe(Some(None::<i32>));
		assert_eq!(opt, Optional::Present(None));
	}
}
