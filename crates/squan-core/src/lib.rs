// SPDX-License-Identifier: Apache-2.0
//! squan-core: Square-1 notation compiler.
//!
//! Turns scramble text — canonical `(top,bottom)` turns, `/` layer swaps,
//! karnotation names and alignment-sensitive case shorthands — into a
//! concrete puzzle-state encoding, and inverts scrambles at the notation
//! level. The crate is pure and synchronous: the only process-wide data
//! is a pair of immutable notation tables, so concurrent use needs no
//! locking and every call is independent and idempotent.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod compile;
mod error;
mod karn;
mod layout;
mod moves;
mod rewrite;
mod shorthand;
mod state;

/// Compilation entry points and notation-level inversion.
pub use compile::{compile, invert, replay};
/// Error taxonomy for state decoding and scramble compilation.
pub use error::ScrambleError;
/// The compiled named-turn table, for callers canonicalizing fragments.
pub use karn::karn_table;
/// Per-slot piece placement decoding.
pub use layout::{PieceKind, Placement};
/// Canonical move descriptors and the permissive parser.
pub use moves::{parse_scramble, Move};
/// The fixpoint token-rewrite engine.
pub use rewrite::RewriteTable;
/// Alignment parity state and shorthand expansion.
pub use shorthand::{expand, Alignment};
/// Layer and whole-puzzle state encodings.
pub use state::{Layer, PuzzleState, SLOTS_PER_LAYER};
