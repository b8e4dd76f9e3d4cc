// SPDX-License-Identifier: Apache-2.0
//! Scramble compilation and notation-level inversion.

use crate::error::ScrambleError;
use crate::moves::parse_scramble;
use crate::shorthand::expand;
use crate::state::PuzzleState;

/// Compiles raw scramble text — canonical turns, karnotation names and
/// case shorthands in any mix — into the state it produces from solved.
///
/// # Errors
/// Propagates the expansion errors of [`expand`].
pub fn compile(text: &str) -> Result<PuzzleState, ScrambleError> {
    Ok(replay(&expand(text)?))
}

/// Replays already-canonical move text from the solved state. No
/// expansion: shorthand names in `text` are dropped by the parser.
#[must_use]
pub fn replay(notation: &str) -> PuzzleState {
    PuzzleState::solved().apply_all(&parse_scramble(notation))
}

/// Inverts a scramble at the notation level: fragments between layer swaps
/// are reversed and every integer in them negated, so compiling the result
/// undoes the original.
///
/// Precondition: `text` must not contain unexpanded shorthand names — a
/// shorthand is not its own inverse, and this routine does not expand.
/// Callers holding shorthand input run [`expand`] first.
#[must_use]
pub fn invert(text: &str) -> String {
    let fragments: Vec<&str> = text.trim().split('/').collect();
    fragments
        .iter()
        .rev()
        .map(|fragment| invert_fragment(fragment.trim()))
        .collect::<Vec<_>>()
        .join("/")
}

fn invert_fragment(fragment: &str) -> String {
    if let Some(group) = parenthesized_group(fragment) {
        return format!("({})", negate_values(group));
    }
    if fragment.contains(',') {
        return negate_values(fragment);
    }
    fragment.to_owned()
}

/// First non-empty `(...)` group, if any. When present it stands in for
/// the whole fragment; text around it is dropped.
fn parenthesized_group(fragment: &str) -> Option<&str> {
    let open = fragment.find('(')?;
    let rest = &fragment[open + 1..];
    let close = rest.find(')')?;
    let group = &rest[..close];
    (!group.is_empty()).then_some(group)
}

fn negate_values(values: &str) -> String {
    values
        .split(',')
        .map(|value| {
            let value = value.trim();
            value
                .parse::<i32>()
                .map_or_else(|_| value.to_owned(), |n| (-n).to_string())
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_scramble_compiles_to_solved() {
        assert_eq!(compile("").unwrap(), PuzzleState::solved());
        assert_eq!(compile("").unwrap().wire(), "011233455677|998bbaddcffe");
    }

    #[test]
    fn single_top_turn_rotates_only_the_top_layer() {
        let state = compile("(3,0)").unwrap();
        assert_eq!(state.wire(), "233455677011|998bbaddcffe");
    }

    #[test]
    fn lone_swap_has_the_documented_output() {
        assert_eq!(compile("/").unwrap().wire(), "011233998bba|455677ddcffe");
    }

    #[test]
    fn invert_reverses_and_negates() {
        assert_eq!(invert("3,0/0,3"), "0,-3/-3,0");
        assert_eq!(invert("(3,0)/(0,3)"), "(0,-3)/(-3,0)");
        assert_eq!(invert("(3,0) / (0,-3)"), "(0,3)/(-3,0)");
    }

    #[test]
    fn invert_leaves_non_numeric_values_alone() {
        assert_eq!(invert("x/3,0"), "0,-3/x");
        assert_eq!(invert(""), "");
    }

    #[test]
    fn compiling_the_inverse_returns_to_the_start() {
        let expanded = expand("(3,0)/(0,3)").unwrap();
        let scrambled = replay(&expanded);
        let back = scrambled.apply_all(&parse_scramble(&invert(&expanded)));
        assert_eq!(back, PuzzleState::solved());
    }

    #[test]
    fn replay_skips_expansion() {
        // `U` only means `3,0` after expansion; replay drops it.
        assert_eq!(replay("U"), PuzzleState::solved());
        assert_ne!(compile("U").unwrap(), PuzzleState::solved());
    }
}
