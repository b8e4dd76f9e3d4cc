// SPDX-License-Identifier: Apache-2.0
//! squan: Square-1 authoring CLI.
//!
//! Wraps the notation compiler and the SVG renderer for use from scripts
//! and build pipelines:
//!
//! ```text
//! squan compile "(1,0) / bjj"        # final state, wire form
//! squan expand "U u4' nn"            # canonical slash-delimited form
//! squan invert "1,0/4,-2"            # undo scramble, notation level
//! squan render -o cube.svg "0,-1/3,0" # standalone SVG
//! ```
//!
//! Exits `0` on success and non-zero with a descriptive message when a
//! scramble fails to compile or an output file cannot be written.

#![deny(rust_2018_idioms)]
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
    clippy::dbg_macro
)]
// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![allow(clippy::multiple_crate_versions, clippy::struct_excessive_bools)]

mod scheme;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use squan_core::{expand, invert, replay, PuzzleState};
use squan_scene::{render, ColorScheme, LayerChoice, PieceColors, RenderOptions};
use tracing::debug;

use crate::scheme::SchemeFile;

#[derive(Parser)]
#[command(name = "squan", version, about = "Square-1 scramble compiler and renderer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a scramble and print the resulting state in wire form.
    Compile {
        /// Treat the input as an algorithm: print the state it solves
        /// from, i.e. compile its inverse.
        #[arg(long)]
        alg: bool,
        /// Scramble text (canonical turns, karnotation, shorthands).
        input: String,
    },
    /// Expand a scramble to canonical slash-delimited form.
    Expand {
        /// Scramble text.
        input: String,
    },
    /// Print the inverse of a scramble (expanded first).
    Invert {
        /// Scramble text.
        input: String,
    },
    /// Render a scramble or state as a standalone SVG document.
    Render {
        /// Treat the input as an algorithm (render the state it solves
        /// from).
        #[arg(long, conflicts_with = "hex")]
        alg: bool,
        /// Treat the input as a wire-form state instead of a scramble.
        #[arg(long)]
        hex: bool,
        /// Nominal image size in pixels.
        #[arg(long, default_value_t = 400.0)]
        size: f64,
        /// Ring distance between the layers, in percent.
        #[arg(long, default_value_t = 5.0)]
        gap: f64,
        /// Stack the layers vertically.
        #[arg(long)]
        vertical: bool,
        /// Omit the slice-position indicators.
        #[arg(long)]
        hide_slice: bool,
        /// Which layers to render.
        #[arg(long, value_enum, default_value_t = LayerArg::Both)]
        layer: LayerArg,
        /// JSON color-configuration overlay.
        #[arg(long)]
        scheme: Option<PathBuf>,
        /// Write the SVG here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Scramble text, or a wire-form state with `--hex`.
        input: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LayerArg {
    Top,
    Bottom,
    Both,
}

impl std::fmt::Display for LayerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}

impl From<LayerArg> for LayerChoice {
    fn from(arg: LayerArg) -> Self {
        match arg {
            LayerArg::Top => Self::Top,
            LayerArg::Bottom => Self::Bottom,
            LayerArg::Both => Self::Both,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.command {
        Command::Compile { alg, input } => {
            let state = resolve_state(&input, alg)?;
            println!("{}", state.wire());
        }
        Command::Expand { input } => {
            println!("{}", expand(&input)?);
        }
        Command::Invert { input } => {
            let expanded = expand(&input)?;
            debug!(%expanded, "inverting expanded scramble");
            println!("{}", invert(&expanded));
        }
        Command::Render {
            alg,
            hex,
            size,
            gap,
            vertical,
            hide_slice,
            layer,
            scheme,
            output,
            input,
        } => {
            let state = if hex {
                PuzzleState::from_wire(&input)?
            } else {
                resolve_state(&input, alg)?
            };
            let (scheme, colors) = match scheme {
                Some(path) => SchemeFile::load(&path)?.apply()?,
                None => (ColorScheme::default(), PieceColors::default()),
            };
            let options = RenderOptions {
                size,
                gap,
                vertical,
                show_slice: !hide_slice,
            };
            let svg = render(&state, &scheme, &colors, &options, layer.into())?;
            match output {
                Some(path) => {
                    fs::write(&path, &svg)
                        .with_context(|| format!("writing {}", path.display()))?;
                    debug!(path = %path.display(), bytes = svg.len(), "wrote SVG");
                }
                None => println!("{svg}"),
            }
        }
    }
    Ok(())
}

/// Expands `input` and folds it onto the solved state; with `alg` the
/// expanded scramble is inverted first, yielding the state the algorithm
/// solves from.
fn resolve_state(input: &str, alg: bool) -> Result<PuzzleState> {
    let expanded = expand(input)?;
    debug!(%expanded, "expanded scramble");
    let notation = if alg { invert(&expanded) } else { expanded };
    Ok(replay(&notation))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use squan_core::parse_scramble;

    #[test]
    fn alg_mode_is_compile_of_the_inverse() {
        let scrambled = resolve_state("(3,0)/(0,3)", false).unwrap();
        let solves_from = resolve_state("(3,0)/(0,3)", true).unwrap();
        let expanded = expand("(3,0)/(0,3)").unwrap();
        let undone = solves_from.apply_all(&parse_scramble(&expanded));
        // Applying the algorithm to the state it solves from reaches
        // solved; applying it from solved reaches the scrambled state.
        assert_eq!(undone, PuzzleState::solved());
        assert_ne!(scrambled, solves_from);
    }
}
