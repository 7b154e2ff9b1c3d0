/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`Absent`] marker that stands in for a missing value of any type

use std::fmt::{self, Display};

use crate::Optional;

static INSTANCE: Absent = Absent;

/// A stateless marker for "no value"
///
/// It carries no data and thus isn't tied to any `T`, so it converts into the
/// [`Absent`](`Optional::Absent`) variant of every [`Optional<T>`].
/// A single instance lives for the whole lifetime of the process, see [`Absent::instance()`].
///
/// # Example
///
/// ```
/// use optional::{Absent, Optional};
///
/// let name: Optional<String> = Absent.into();
/// let age: Optional<u8> = Absent::instance().into_optional();
///
/// assert!(name.is_none());
/// assert!(age.is_none());
/// assert!(std::ptr::eq(Absent::instance(), Absent::instance()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Absent;

impl Absent {
	/// Returns the process-wide instance.
	///
	/// It is a constant, not a lazily created value, so it is safe to call from any thread.
	#[must_use]
	pub fn instance() -> &'static Self {
		&INSTANCE
	}

	/// Converts the marker into the [`Absent`](`Optional::Absent`) variant of an [`Optional<T>`]
	#[must_use]
	pub const fn into_optional<T>(self) -> Optional<T> {
		Optional::Absent
	}
}

impl<T> From<Absent> for Optional<T> {
	fn from(absent: Absent) -> Self {
		absent.into_optional()
	}
}

impl<T> From<&Absent> for Optional<T> {
	fn from(absent: &Absent) -> Self {
		absent.into_optional()
	}
}

impl<T> PartialEq<Absent> for Optional<T> {
	fn eq(&self, _other: &Absent) -> bool {
		self.is_none()
	}
}

impl Display for Absent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("None")
	}
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;

	#[test]
	fn instance_is_shared() {
		let first = Absent::instance();
		let second = Absent::instance();

		assert!(
			std::ptr::eq(first, second),
			"two accesses should return the same instance"
		);
	}

	#[test]
	fn instance_is_shared_across_threads() {
		let other = thread::spawn(Absent::instance)
			.join()
			.expect("thread panicked");

		assert!(
			std::ptr::eq(Absent::instance(), other),
			"every thread should see the same instance"
		);
	}

	#[test]
	fn converts_into_any_optional() {
		let string: Optional<String> = Absent.into();
		let number: Optional<i32> = Absent::instance().into();

		assert_eq!(string, Optional::Absent);
		assert_eq!(number, Optional::Absent);
	}

	#[test]
	fn compares_with_optional() {
		assert_eq!(Optional::<u8>::Absent, Absent);
		assert_ne!(Optional::Present(1), Absent);
	}

	#[test]
	fn displays_as_none() {
		assert_eq!(Absent.to_string(), "None");
	}
}
