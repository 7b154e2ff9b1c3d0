/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ways to get the value out of an [`Optional`]
//!
//! [`get()`](`Optional::get`) is the checked way and returns [`EmptyAccess`] when there's nothing to get.
//! [`unwrap()`](`Optional::unwrap`) panics instead, the rest fall back to some other value and never fail.

use super::Optional;
use crate::EmptyAccess;

impl<T> Optional<T> {
	/// Returns the value.
	///
	/// # Errors
	/// Returns [`EmptyAccess`] if there is no value
	pub fn get(self) -> Result<T, EmptyAccess> {
		match self {
			Self::Present(value) => Ok(value),
			Self::Absent => {
				tracing::trace!("Tried to get the value of an absent Optional");
				Err(EmptyAccess)
			}
		}
	}

	/// Returns the value, panicking if there is none.
	///
	/// Prefer [`get()`](`Optional::get`) or [`unwrap_or()`](`Optional::unwrap_or`)
	/// unless a value is guaranteed to be there.
	///
	/// # Panics
	/// If the value is [`Absent`](`Optional::Absent`), with the message of [`EmptyAccess`]
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self.get() {
			Ok(value) => value,
			Err(e) => panic!("{e}"),
		}
	}

	/// Returns the value, panicking with `msg` if there is none
	///
	/// # Panics
	/// If the value is [`Absent`](`Optional::Absent`)
	#[track_caller]
	pub fn expect(self, msg: &str) -> T {
		match self.get() {
			Ok(value) => value,
			Err(e) => panic!("{msg}: {e}"),
		}
	}

	/// Returns the value or `fallback` if there is none.
	///
	/// `fallback` is evaluated by the caller either way. Use [`unwrap_or_else()`](`Optional::unwrap_or_else`)
	/// to compute it only when it's needed.
	pub fn unwrap_or(self, fallback: T) -> T {
		match self {
			Self::Present(value) => value,
			Self::Absent => fallback,
		}
	}

	/// Alias for [`unwrap_or()`](`Optional::unwrap_or`)
	pub fn or(self, fallback: T) -> T {
		self.unwrap_or(fallback)
	}

	/// Returns the value or the result of `f` if there is none
	pub fn unwrap_or_else<F>(self, f: F) -> T
	where
		F: FnOnce() -> T,
	{
		match self {
			Self::Present(value) => value,
			Self::Absent => f(),
		}
	}

	/// Returns the value or [`T::default()`](`Default::default`) if there is none
	pub fn unwrap_or_default(self) -> T
	where
		T: Default,
	{
		self.unwrap_or_else(T::default)
	}

	/// Transforms the value with `f` or returns `fallback` if there is none
	pub fn map_or<K, F>(self, fallback: K, f: F) -> K
	where
		F: FnOnce(T) -> K,
	{
		match self {
			Self::Present(value) => f(value),
			Self::Absent => fallback,
		}
	}

	/// Transforms the value with `f` or computes a fallback with `default` if there is none
	pub fn map_or_else<K, D, F>(self, default: D, f: F) -> K
	where
		D: FnOnce() -> K,
		F: FnOnce(T) -> K,
	{
		match self {
			Self::Present(value) => f(value),
			Self::Absent => default(),
		}
	}

	/// Converts into a [`Result`], using `err` for the absent case
	///
	/// # Errors
	/// Returns `err` if there is no value
	pub fn ok_or<E>(self, err: E) -> Result<T, E> {
		match self {
			Self::Present(value) => Ok(value),
			Self::Absent => Err(err),
		}
	}

	/// Converts into a [`Result`], calling `f` for the absent case
	///
	/// # Errors
	/// Returns the result of `f` if there is no value
	pub fn ok_or_else<E, F>(self, f: F) -> Result<T, E>
	where
		F: FnOnce() -> E,
	{
		match self {
			Self::Present(value) => Ok(value),
			Self::Absent => Err(f()),
		}
	}
}
