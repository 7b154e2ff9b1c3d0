/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! [`Optional`] - a container that is either [`Present`](`Optional::Present`) with exactly one value
//! or [`Absent`](`Optional::Absent`).
//!
//! # Overview
//!
//! Values that may be missing enter the container through a single bridge, [`Optional::from_unsafe()`],
//! which is the only place that checks for a missing marker (see [`Nullable`]).
//! Everything downstream relies on that check and never repeats it.
//!
//! Once wrapped, a value can be transformed with [`map()`](`Optional::map`),
//! chained with [`flat_map()`](`Optional::flat_map`) and extracted either with a fallback
//! ([`unwrap_or()`](`Optional::unwrap_or`)) or with a checked [`get()`](`Optional::get`)
//! that returns [`EmptyAccess`] instead of a value when there is none.
//!
//! # Example
//!
//! ```
//! use optional::Optional;
//!
//! fn find(haystack: &str, needle: &str) -> Optional<usize> {
//!     haystack.find(needle).into()
//! }
//!
//! let doc = Optional::from_unsafe(Some("hello"));
//! let hello_world = doc.map(|s| format!("{s}, world!"));
//! assert_eq!(hello_world, Optional::Present("hello, world!".to_owned()));
//!
//! let index = hello_world.as_ref().flat_map(|s| find(s, "world"));
//! assert_eq!(index, Optional::Present(7));
//!
//! let not_found = hello_world
//!     .flat_map(|s| find(&s, "XXX").map(|i| i as i64))
//!     .unwrap_or(-1);
//! assert_eq!(not_found, -1);
//! ```

pub mod absent;
pub mod all;
pub mod error;
pub mod nullable;
pub mod optional;

pub use self::{absent::Absent, error::EmptyAccess, nullable::Nullable, optional::Optional};
