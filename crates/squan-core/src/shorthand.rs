// SPDX-License-Identifier: Apache-2.0
//! Alignment-sensitive expansion of scramble text to canonical form.
//!
//! Expansion happens in layers. `flatten` strips slash/parenthesis
//! punctuation down to plain space-separated tokens. `add_commas` turns
//! bare numeric tokens (`-23`, `40`) into explicit `top,bottom` pairs. The
//! named-turn table then canonicalizes karnotation names, and finally the
//! stateful scan resolves case shorthands whose expansion depends on the
//! layers' alignment parity at the point they are reached.
//!
//! Alignment is a pair of booleans, one per layer, flipped by every turn
//! whose offset for that layer is not a multiple of 3. It is transient
//! compiler state: two inputs that expand to the same primitive-turn
//! sequence agree on alignment at every prefix, no matter which of them
//! used shorthands to get there.

use crate::error::ScrambleError;
use crate::karn::{karn_table, shorthand_table, ALIGNMENT_FREE};
use crate::rewrite::RewriteTable;

/// Per-layer alignment parity during expansion.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Alignment {
    /// Top layer is off its quantized reference position.
    pub top: bool,
    /// Bottom layer is off its quantized reference position.
    pub bottom: bool,
}

impl Alignment {
    /// Suffix encoding used by the shorthand table: `"1"`/`"0"` for the
    /// top layer followed by `"-1"`/`"0"` for the bottom layer.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match (self.top, self.bottom) {
            (false, false) => "00",
            (true, false) => "10",
            (false, true) => "0-1",
            (true, true) => "1-1",
        }
    }

    fn advance(&mut self, top: i32, bottom: i32) {
        if top % 3 != 0 {
            self.top = !self.top;
        }
        if bottom % 3 != 0 {
            self.bottom = !self.bottom;
        }
    }
}

/// Expands scramble text to canonical slash-delimited `top,bottom` form.
///
/// Output joins every token boundary with `/`: karnotation implies a layer
/// swap between consecutive moves, and explicit slashes in the input come
/// back as those same boundaries. Boundary whitespace is preserved as
/// boundary swaps, so `"/"` alone expands to a lone swap.
///
/// # Errors
/// [`ScrambleError::UnrecognizedToken`] for a bare numeric token that
/// cannot be split into a pair, and [`ScrambleError::UnknownShorthand`]
/// for a shorthand with no entry at the alignment it was reached under.
pub fn expand(text: &str) -> Result<String, ScrambleError> {
    let table = karn_table();
    let flat = flatten(text);
    let paired = add_commas(&flat)?;
    replace_shorthands(&table.rewrite(&paired), table)
}

/// Flattens slashes (either direction) to spaces, removes parentheses and
/// collapses runs of spaces. Deliberately does not trim: edge spaces carry
/// the scramble's leading/trailing layer swaps.
fn flatten(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' => {}
            '/' | '\\' | ' ' => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Splits bare numeric tokens into `top,bottom` pairs by character count.
///
/// The split convention is positional and counts the sign character:
/// `4` → `4,0`; `-4` → `-4,0`; `23` → `2,3`; `-23` → `-2,3`; `234` →
/// `2,34`; `1234` and `-123` → split after the second character. Scrambles
/// in the wild depend on these exact splits, so no cleaner general rule is
/// inferred. Any longer numeric token is fatal.
fn add_commas(text: &str) -> Result<String, ScrambleError> {
    let mut out: Vec<String> = Vec::new();
    for token in text.split(' ') {
        if token.is_empty() || !is_bare_numeric(token) {
            out.push(token.to_owned());
            continue;
        }
        let negative = token.starts_with('-');
        let (top, bottom) = match token.len() {
            1 => (token, "0"),
            2 if negative => (token, "0"),
            2 => token.split_at(1),
            3 if negative => token.split_at(2),
            3 => token.split_at(1),
            4 => token.split_at(2),
            _ => return Err(ScrambleError::UnrecognizedToken(token.to_owned())),
        };
        out.push(format!("{top},{bottom}"));
    }
    Ok(out.join(" "))
}

/// A token is bare-numeric when removing its first `-` (anywhere) leaves
/// only ASCII digits. The mid-token case admits the `2-3` spelling of
/// `2,-3`, which the positional split then honors.
fn is_bare_numeric(token: &str) -> bool {
    let mut minus_seen = false;
    let mut digits = 0usize;
    for ch in token.chars() {
        if ch == '-' && !minus_seen {
            minus_seen = true;
        } else if ch.is_ascii_digit() {
            digits += 1;
        } else {
            return false;
        }
    }
    digits > 0
}

fn parse_turn_pair(token: &str) -> Option<(i32, i32)> {
    let (top, bottom) = token.split_once(',')?;
    Some((top.trim().parse().ok()?, bottom.trim().parse().ok()?))
}

/// Canonical primitive turns of a notation fragment.
///
/// Shared by literal-token parity tracking and shorthand-fragment parity
/// tracking so both advance alignment from exactly the same turn sequence:
/// flatten the fragment's slashes, canonicalize names, keep what parses as
/// a pair.
fn primitive_turns_of(fragment: &str, table: &RewriteTable) -> Vec<(i32, i32)> {
    let spaced = fragment.replace('/', " ");
    table
        .rewrite(&spaced)
        .split(' ')
        .filter_map(parse_turn_pair)
        .collect()
}

/// Resolves case shorthands in already-canonicalized token text.
fn replace_shorthands(scramble: &str, table: &RewriteTable) -> Result<String, ScrambleError> {
    let tokens: Vec<&str> = scramble.split(' ').collect();

    // Fast path: nothing left to resolve, so a plain rewrite suffices.
    // Must agree with the stateful scan on any input it accepts.
    let literal_only = tokens.iter().all(|&token| {
        token.is_empty() || parse_turn_pair(token).is_some() || table.contains_token(token)
    });
    if literal_only {
        return Ok(slashed(&table.rewrite(scramble)));
    }

    let shorthands = shorthand_table();
    let mut alignment = Alignment::default();
    let mut out: Vec<&str> = Vec::with_capacity(tokens.len());
    for &token in &tokens {
        if token.is_empty() || token.contains(',') {
            if let Some((top, bottom)) = parse_turn_pair(token) {
                alignment.advance(top, bottom);
            }
            out.push(token);
            continue;
        }
        let name = token.to_lowercase();
        let fragment = if ALIGNMENT_FREE.contains(&name.as_str()) {
            shorthands.get(name.as_str())
        } else {
            shorthands.get(format!("{name}{}", alignment.suffix()).as_str())
        };
        let Some(&fragment) = fragment else {
            return Err(ScrambleError::UnknownShorthand {
                name: token.to_owned(),
                alignment: alignment.suffix().to_owned(),
            });
        };
        for (top, bottom) in primitive_turns_of(fragment, table) {
            alignment.advance(top, bottom);
        }
        out.push(fragment);
    }

    // Shorthand fragments brought their own slashes back in; tighten the
    // spacing around them, keep swap-swap adjacency well-formed with an
    // explicit zero turn, then flatten for the final canonicalization.
    let tightened = tighten_slashes(&out.join(" "));
    let filled = tightened.replace("//", "/0,0/");
    Ok(slashed(&table.rewrite(&filled.replace('/', " "))))
}

/// Removes spaces adjacent to slashes so fragment boundaries collapse to a
/// single delimiter.
fn tighten_slashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '/' {
            while out.ends_with(' ') {
                out.pop();
            }
            out.push('/');
        } else if ch != ' ' || !out.ends_with('/') {
            out.push(ch);
        }
    }
    out
}

fn slashed(text: &str) -> String {
    text.replace(' ', "/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn literal_pairs_pass_straight_through() {
        assert_eq!(expand("3,0").unwrap(), "3,0");
        assert_eq!(expand("(3,0)/(0,3)").unwrap(), "3,0/0,3");
    }

    #[test]
    fn a_lone_slash_survives_as_a_swap() {
        assert_eq!(expand("/").unwrap(), "/");
    }

    #[test]
    fn bare_numbers_split_by_the_positional_convention() {
        assert_eq!(expand("4").unwrap(), "4,0");
        assert_eq!(expand("-4").unwrap(), "-4,0");
        assert_eq!(expand("23").unwrap(), "2,3");
        assert_eq!(expand("-23").unwrap(), "-2,3");
        assert_eq!(expand("234").unwrap(), "2,34");
        assert_eq!(expand("1234").unwrap(), "12,34");
        assert_eq!(expand("2-3").unwrap(), "2,-3");
    }

    #[test]
    fn oversized_numeric_tokens_are_fatal() {
        assert_eq!(
            expand("12345"),
            Err(ScrambleError::UnrecognizedToken("12345".to_owned()))
        );
    }

    #[test]
    fn karnotation_names_canonicalize_with_implicit_swaps() {
        assert_eq!(expand("U").unwrap(), "3,0");
        assert_eq!(expand("U U'").unwrap(), "3,0/-3,0");
        assert_eq!(expand("W").unwrap(), "3,0/-3,0");
    }

    #[test]
    fn alignment_free_shorthands_expand_anywhere() {
        assert_eq!(expand("nn").unwrap(), "/3,-3/-3,3/");
        assert_eq!(expand("bjj").unwrap(), "/-3,0/3,3/0,-3/");
    }

    #[test]
    fn aligned_shorthand_picks_the_variant_for_the_current_parity() {
        // `1,0` knocks the top layer off alignment, so `aa` resolves as
        // its top-misaligned variant.
        assert_eq!(expand("1,0 aa").unwrap(), "1,0/2,-1/-2,-2/2,-1/-2,4/");
    }

    #[test]
    fn shorthand_at_wrong_alignment_reports_name_and_alignment() {
        assert_eq!(
            expand("aa"),
            Err(ScrambleError::UnknownShorthand {
                name: "aa".to_owned(),
                alignment: "00".to_owned(),
            })
        );
        assert_eq!(
            expand("2,-1 aa"),
            Err(ScrambleError::UnknownShorthand {
                name: "aa".to_owned(),
                alignment: "1-1".to_owned(),
            })
        );
    }

    #[test]
    fn alignment_tracks_expanded_macros_like_literal_turns() {
        // `u` canonicalizes to `2,-1` before the scan, so both spellings
        // reach `aa` at the same alignment and fail identically.
        assert_eq!(expand("u aa"), expand("2,-1 aa"));
    }

    #[test]
    fn shorthand_lookup_is_case_insensitive() {
        assert_eq!(expand("NN").unwrap(), expand("nn").unwrap());
        assert_eq!(
            expand("1,0 AA").unwrap(),
            expand("1,0 aa").unwrap()
        );
    }

    #[test]
    fn adjacent_fragments_get_an_explicit_zero_turn() {
        let expanded = expand("bjj fjj").unwrap();
        assert_eq!(expanded, "/-3,0/3,3/0,-3/0,0/3,0/-3,-3/0,3/");
    }

    #[test]
    fn expansion_is_deterministic() {
        assert_eq!(expand("1,0 aa 3,0"), expand("1,0 aa 3,0"));
    }

    #[test]
    fn fast_path_matches_stateful_path_on_literal_input() {
        // Literal-only input short-circuits alignment tracking; the output
        // must be what the full scan would have produced.
        assert_eq!(expand("-3,0/0,3").unwrap(), "-3,0/0,3");
    }

    #[test]
    fn alignment_suffix_encoding() {
        let mut alignment = Alignment::default();
        assert_eq!(alignment.suffix(), "00");
        alignment.advance(1, 0);
        assert_eq!(alignment.suffix(), "10");
        alignment.advance(1, 2);
        assert_eq!(alignment.suffix(), "0-1");
        alignment.advance(2, 0);
        assert_eq!(alignment.suffix(), "1-1");
        alignment.advance(3, -3);
        assert_eq!(alignment.suffix(), "1-1");
    }
}
