/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`EmptyAccess`] error

/// The value of an [`Absent`](`crate::Optional::Absent`) optional was read
///
/// This is a programmer error: the emptiness should've been checked with [`is_some()`](`crate::Optional::is_some`)
/// or avoided altogether with [`unwrap_or()`](`crate::Optional::unwrap_or`) or [`map()`](`crate::Optional::map`).
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[error("attempted to read the value of an absent Optional")]
pub struct EmptyAccess;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message() {
		assert_eq!(
			EmptyAccess.to_string(),
			"attempted to read the value of an absent Optional"
		);
	}

	#[test]
	fn is_std_error() {
		let err: Box<dyn std::error::Error + Send + Sync> = Box::new(EmptyAccess);
		assert!(err.source().is_none(), "EmptyAccess has no underlying cause");
	}
}
