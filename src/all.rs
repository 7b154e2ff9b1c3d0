/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains helpers that combine many [`Optional`]s into one

use itertools::{FoldWhile, Itertools};

use crate::Optional;

impl<T> Optional<T> {
	/// Collects the values of all `items` if every one of them is present.
	///
	/// Stops at the first [`Absent`](`Optional::Absent`) item and returns [`Absent`](`Optional::Absent`).
	/// Items after it aren't pulled from the iterator.
	/// No items at all result in an empty but present [`Vec`].
	///
	/// Use [`present_values()`](`Optional::present_values`) to skip the absent items instead.
	///
	/// # Example
	///
	/// ```
	/// use optional::Optional;
	///
	/// let all = Optional::all([Optional::Present(1), Optional::Present(2), Optional::Present(3)]);
	/// assert_eq!(all, Optional::Present(vec![1, 2, 3]));
	///
	/// let some = Optional::all([Optional::Present(1), Optional::Absent, Optional::Present(3)]);
	/// assert_eq!(some, Optional::Absent);
	/// ```
	#[must_use]
	pub fn all<I>(items: I) -> Optional<Vec<T>>
	where
		I: IntoIterator<Item = Optional<T>>,
	{
		items
			.into_iter()
			.enumerate()
			.fold_while(Optional::Present(Vec::new()), |acc, (idx, item)| {
				match (acc, item) {
					(Optional::Present(mut values), Optional::Present(value)) => {
						values.push(value);
						FoldWhile::Continue(Optional::Present(values))
					}
					_ => {
						tracing::trace!("Item #{idx} is absent, discarding all collected values");
						FoldWhile::Done(Optional::Absent)
					}
				}
			})
			.into_inner()
	}

	/// Collects the values of the present `items`, skipping the absent ones.
	///
	/// The result is always [`Present`](`Optional::Present`), even if no item had a value.
	#[must_use]
	pub fn present_values<I>(items: I) -> Optional<Vec<T>>
	where
		I: IntoIterator<Item = Optional<T>>,
	{
		Optional::Present(items.into_iter().flatten().collect())
	}
}

/// Same semantics as [`Optional::all()`] but into any collection
impl<T, V> FromIterator<Optional<T>> for Optional<V>
where
	V: FromIterator<T>,
{
	fn from_iter<I: IntoIterator<Item = Optional<T>>>(iter: I) -> Self {
		iter.into_iter()
			.map(Optional::into_option)
			.collect::<Option<V>>()
			.into()
	}
}

#[cfg(test)]
mod tests {
	use std::{cell::Cell, collections::HashSet};

	use super::*;

	#[test]
	fn all_present() {
		let items = [Optional::Present(1), Optional::Present(2), Optional::Present(3)];
		assert_eq!(Optional::all(items), Optional::Present(vec![1, 2, 3]));
	}

	#[test]
	fn absent_in_the_middle() {
		let items = [Optional::Present(1), Optional::Absent, Optional::Present(3)];
		assert_eq!(Optional::all(items), Optional::Absent);
	}

	#[test]
	fn absent_at_the_edges() {
		assert_eq!(
			Optional::all([Optional::Absent, Optional::Present(2)]),
			Optional::Absent
		);
		assert_eq!(
			Optional::all([Optional::Present(1), Optional::Absent]),
			Optional::Absent
		);
	}

	#[test]
	fn no_items() {
		assert_eq!(
			Optional::all(Vec::<Optional<i32>>::new()),
			Optional::Present(Vec::new())
		);
	}

	#[test]
	fn stops_at_first_absent() {
		let pulled = Cell::new(0);
		let items = [Optional::Present(1), Optional::Absent, Optional::Present(3)]
			.into_iter()
			.inspect(|_| pulled.set(pulled.get() + 1));

		assert_eq!(Optional::all(items), Optional::Absent);
		assert_eq!(pulled.get(), 2, "items after the first absent one shouldn't be pulled");
	}

	#[test]
	fn present_values_skips_absent() {
		let items = [Optional::Present(1), Optional::Absent, Optional::Present(3)];
		assert_eq!(Optional::present_values(items), Optional::Present(vec![1, 3]));
	}

	#[test]
	fn present_values_of_nothing_is_present() {
		let items = [Optional::<i32>::Absent, Optional::Absent];
		assert_eq!(Optional::present_values(items), Optional::Present(Vec::new()));
	}

	#[test]
	fn collect_matches_all() {
		let present = [Optional::Present('a'), Optional::Present('b')];
		let collected: Optional<String> = present.into_iter().collect();
		assert_eq!(collected, Optional::Present("ab".to_owned()));

		let with_absent = [Optional::Present(1), Optional::Absent, Optional::Present(1)];
		let collected: Optional<HashSet<i32>> = with_absent.into_iter().collect();
		assert_eq!(collected, Optional::Absent);
	}
}
