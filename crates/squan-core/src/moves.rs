// SPDX-License-Identifier: Apache-2.0
//! Canonical move descriptors and the permissive move-text parser.

/// One primitive operation on the puzzle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Move {
    /// Rotate the top layer by `top` slots and the bottom layer by `bottom`
    /// slots (positive is one direction, negative the other; one slot is
    /// 30°). The layers rotate independently.
    Turn {
        /// Slot offset applied to the top layer.
        top: i32,
        /// Slot offset applied to the bottom layer.
        bottom: i32,
    },
    /// Exchange the near-equator halves of the two layers.
    LayerSwap,
}

/// Parses canonical move text into an ordered move sequence.
///
/// Every `/` is a layer swap regardless of surrounding whitespace. A token
/// containing a comma is a turn once surrounding parentheses are stripped
/// and both halves parse as integers. Anything else is silently dropped:
/// existing scrambles carry stray punctuation, and compatibility requires
/// tolerating it. No bounds are imposed on turn offsets.
#[must_use]
pub fn parse_scramble(text: &str) -> Vec<Move> {
    let normalized = text.replace('/', " / ");
    normalized.split_whitespace().filter_map(classify).collect()
}

fn classify(token: &str) -> Option<Move> {
    if token == "/" {
        return Some(Move::LayerSwap);
    }
    if !token.contains(',') {
        return None;
    }
    let cleaned = token.replace(['(', ')'], "");
    let mut halves = cleaned.split(',');
    let top = halves.next()?.trim().parse().ok()?;
    let bottom = halves.next()?.trim().parse().ok()?;
    Some(Move::Turn { top, bottom })
}
