/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Walks through the basic [`Optional`] call patterns and logs what each one produces.
//!
//! Run with `RUST_LOG=trace cargo run --example hello_world` to see the library's own events as well

use optional::Optional;
use tracing_subscriber::{EnvFilter, fmt};

fn append_world(s: &str) -> String {
	format!("{s}, world!")
}

fn find_index(s: &str, substr: &str) -> Optional<usize> {
	s.find(substr).into()
}

fn main() {
	fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let doc = Optional::from_unsafe(Some("hello"));
	tracing::info!("doc: {doc}, doc.get(): {:?}", doc.get());

	// a missing value can't be used directly but can still be mapped over
	let crash = Optional::<i32>::from_unsafe(None);
	tracing::info!("crash: {crash}, crash.get(): {:?}", crash.get());

	let hello_world = doc.map(append_world);
	let wont_crash = crash.map(|x| x + 1);
	tracing::info!("{hello_world} {wont_crash}");

	let index = hello_world.as_ref().flat_map(|s| find_index(s, "world"));
	tracing::info!("index: {index}");

	let was_found = hello_world
		.as_ref()
		.flat_map(|s| find_index(s, "XXX"))
		.map_or(-1, |idx| i64::try_from(idx).unwrap_or(i64::MAX));
	tracing::info!("the index is {was_found}");

	let all = Optional::all([index, Optional::Present(0), wont_crash.map(|_| 1)]);
	let present = Optional::present_values([index, Optional::Present(0), wont_crash.map(|_| 1)]);
	tracing::info!("all: {all:?}, present values: {present:?}");
}
