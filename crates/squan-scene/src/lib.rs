// SPDX-License-Identifier: Apache-2.0
//! squan-scene: rendering layer for Square-1 states.
//!
//! Consumes the final state encoding produced by squan-core and emits
//! standalone SVG documents, one visual piece per slot. Colors are
//! resolved through an explicit [`ColorScheme`] and per-piece
//! [`PieceColors`] value; the crate holds no global state and performs no
//! I/O.
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
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod color;
mod error;
mod svg;

/// Color scheme, sticker roles and per-piece paints.
pub use color::{ColorScheme, CornerPaint, EdgePaint, Face, Paint, PieceColors, StickerRole};
/// Rendering error taxonomy.
pub use error::SceneError;
/// SVG document generation.
pub use svg::{render, LayerChoice, RenderOptions};
