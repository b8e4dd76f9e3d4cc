// SPDX-License-Identifier: Apache-2.0
//! Puzzle state encoding and the two primitive state transforms.
//!
//! A Square-1 layer is twelve 30° slots read clockwise from a fixed
//! reference slot. Each slot holds one lowercase hex digit: even digits are
//! single-slot edge pieces, odd digits mark the first slot of a two-slot
//! corner (the following slot holds the corner's duplicate marker). The
//! whole puzzle is the top encoding followed by the bottom encoding.

use std::fmt;
use std::fmt::Write as _;

use crate::error::ScrambleError;
use crate::moves::Move;

/// Number of 30° slots in one layer.
pub const SLOTS_PER_LAYER: usize = 12;

/// One layer's piece encoding: twelve lowercase ASCII hex digits.
///
/// The length invariant is carried by the type; the fallible boundary is
/// [`PuzzleState::from_wire`]. Rotation is total over any integer offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Layer([u8; SLOTS_PER_LAYER]);

impl Layer {
    pub(crate) const fn new(slots: [u8; SLOTS_PER_LAYER]) -> Self {
        Self(slots)
    }

    /// Raw slot bytes, clockwise from the reference slot.
    #[must_use]
    pub fn slots(&self) -> &[u8; SLOTS_PER_LAYER] {
        &self.0
    }

    /// Cyclic left rotation by `places` slots.
    ///
    /// Any integer is accepted; the offset is normalized into `[0, 12)`
    /// first, so negative offsets rotate the other way and multiples of 12
    /// are the identity.
    #[must_use]
    pub fn rotate_left(self, places: i32) -> Self {
        let shift = usize::try_from(places.rem_euclid(12)).unwrap_or(0);
        let mut slots = self.0;
        slots.rotate_left(shift);
        Self(slots)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &slot in &self.0 {
            f.write_char(char::from(slot))?;
        }
        Ok(())
    }
}

/// Full puzzle state: top and bottom layer encodings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PuzzleState {
    /// Top layer encoding.
    pub top: Layer,
    /// Bottom layer encoding.
    pub bottom: Layer,
}

impl PuzzleState {
    /// The solved state every compile starts from.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            top: Layer(*b"011233455677"),
            bottom: Layer(*b"998bbaddcffe"),
        }
    }

    /// Decodes the wire form: 24 hex piece characters with at most one `|`
    /// or `/` separator between the layers. Characters are lowercased.
    ///
    /// # Errors
    /// Returns [`ScrambleError::MalformedState`] when the data-character
    /// count is not exactly 24 or a character is not a hex digit.
    pub fn from_wire(text: &str) -> Result<Self, ScrambleError> {
        let mut data = [0u8; 2 * SLOTS_PER_LAYER];
        let mut len = 0;
        let mut separator_seen = false;
        for byte in text.bytes() {
            if !separator_seen && (byte == b'|' || byte == b'/') {
                separator_seen = true;
                continue;
            }
            let digit = byte.to_ascii_lowercase();
            if !digit.is_ascii_hexdigit() || len == data.len() {
                return Err(ScrambleError::MalformedState(text.to_owned()));
            }
            data[len] = digit;
            len += 1;
        }
        if len != data.len() {
            return Err(ScrambleError::MalformedState(text.to_owned()));
        }
        let mut top = [0u8; SLOTS_PER_LAYER];
        let mut bottom = [0u8; SLOTS_PER_LAYER];
        top.copy_from_slice(&data[..SLOTS_PER_LAYER]);
        bottom.copy_from_slice(&data[SLOTS_PER_LAYER..]);
        Ok(Self {
            top: Layer(top),
            bottom: Layer(bottom),
        })
    }

    /// Emits the canonical wire form, `top|bottom`.
    #[must_use]
    pub fn wire(&self) -> String {
        format!("{}|{}", self.top, self.bottom)
    }

    /// Exchanges the six slots nearest the equator between the layers: the
    /// new top keeps top's first half and takes bottom's first half; the new
    /// bottom is the two second halves. This is the physical twist that lets
    /// the layers trade pieces.
    #[must_use]
    pub fn swap_halves(self) -> Self {
        const HALF: usize = SLOTS_PER_LAYER / 2;
        let mut top = [0u8; SLOTS_PER_LAYER];
        let mut bottom = [0u8; SLOTS_PER_LAYER];
        top[..HALF].copy_from_slice(&self.top.0[..HALF]);
        top[HALF..].copy_from_slice(&self.bottom.0[..HALF]);
        bottom[..HALF].copy_from_slice(&self.top.0[HALF..]);
        bottom[HALF..].copy_from_slice(&self.bottom.0[HALF..]);
        Self {
            top: Layer(top),
            bottom: Layer(bottom),
        }
    }

    /// Applies one move to this state.
    #[must_use]
    pub fn apply(self, mv: &Move) -> Self {
        match *mv {
            Move::Turn { top, bottom } => Self {
                top: self.top.rotate_left(top),
                bottom: self.bottom.rotate_left(bottom),
            },
            Move::LayerSwap => self.swap_halves(),
        }
    }

    /// Replays a move sequence left to right. The algebra is not
    /// commutative, so later moves always act on the state produced by
    /// earlier ones.
    #[must_use]
    pub fn apply_all(self, moves: &[Move]) -> Self {
        moves.iter().fold(self, PuzzleState::apply)
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.top, self.bottom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn solved_wire_form_is_stable() {
        assert_eq!(PuzzleState::solved().wire(), "011233455677|998bbaddcffe");
    }

    #[test]
    fn rotate_left_normalizes_any_offset() {
        let layer = PuzzleState::solved().top;
        assert_eq!(layer.rotate_left(0), layer);
        assert_eq!(layer.rotate_left(12), layer);
        assert_eq!(layer.rotate_left(-12), layer);
        assert_eq!(layer.rotate_left(3), layer.rotate_left(-9));
        assert_eq!(layer.rotate_left(3).to_string(), "233455677011");
    }

    #[test]
    fn swap_halves_exchanges_equator_halves() {
        let swapped = PuzzleState::solved().swap_halves();
        assert_eq!(swapped.wire(), "011233998bba|455677ddcffe");
    }

    #[test]
    fn from_wire_accepts_either_separator_and_lowercases() {
        let a = PuzzleState::from_wire("011233455677|998BBADDCFFE").unwrap();
        let b = PuzzleState::from_wire("011233455677/998bbaddcffe").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.wire(), "011233455677|998bbaddcffe");
    }

    #[test]
    fn from_wire_rejects_bad_lengths_and_digits() {
        assert!(matches!(
            PuzzleState::from_wire("0112334556|998bbaddcffe"),
            Err(ScrambleError::MalformedState(_))
        ));
        assert!(matches!(
            PuzzleState::from_wire("011233455677|998bbaddcffz"),
            Err(ScrambleError::MalformedState(_))
        ));
        // A second separator is data, not separator, and fails the count.
        assert!(PuzzleState::from_wire("011233455677|998bbaddcffe|").is_err());
    }
}
